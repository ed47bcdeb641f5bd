use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Address, Customer, Money, Order, OrderItem, Product};

fn make_items(count: usize) -> Vec<OrderItem> {
    (0..count)
        .map(|i| {
            OrderItem::new(
                format!("item-{i}"),
                format!("SKU-{i:03}"),
                format!("Widget {i}"),
                Money::from_cents(100 + i as i64),
                1,
            )
        })
        .collect()
}

fn bench_order_total(c: &mut Criterion) {
    let order = Order::new("bench-order", "bench-customer", make_items(100)).unwrap();

    c.bench_function("domain/order_total_100_items", |b| {
        b.iter(|| std::hint::black_box(order.total()));
    });
}

fn bench_product_validation(c: &mut Criterion) {
    c.bench_function("domain/product_new", |b| {
        b.iter(|| {
            std::hint::black_box(
                Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap(),
            )
        });
    });
}

fn bench_customer_activation(c: &mut Criterion) {
    c.bench_function("domain/customer_activate", |b| {
        b.iter(|| {
            let mut customer = Customer::new("c1", "Customer 1").unwrap();
            customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap());
            customer.activate().unwrap();
            std::hint::black_box(customer)
        });
    });
}

criterion_group!(
    benches,
    bench_order_total,
    bench_product_validation,
    bench_customer_activation
);
criterion_main!(benches);
