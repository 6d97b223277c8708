use ponpela_core::{Cart, MemoryStorage, Persistence, Product, format_price};

fn product(id: u64, name: &str, price: &str) -> Product {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "price": price,
        "image": "https://shop.example/img.jpg",
    }))
    .unwrap()
}

#[test]
fn adding_twice_makes_one_line_of_two() {
    let x = product(7, "X", "10.00");
    let mut cart = Cart::new();
    cart.add(&x);
    assert_eq!(cart.add(&x), 2);

    assert_eq!(cart.lines().len(), 1);
    let line = &cart.lines()[0];
    assert_eq!(line.id, 7);
    assert_eq!(line.name, "X");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.price_cents, 1000);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(format_price(cart.total_cents()), "₪20.00");
}

#[test]
fn non_positive_quantity_removes_line() {
    let mut cart = Cart::new();
    cart.add(&product(1, "A", "5.00"));
    cart.add(&product(2, "B", "2.50"));

    assert!(cart.update_quantity(1, 0));
    assert!(cart.find_line(1).is_none());
    assert!(cart.update_quantity(2, -3));
    assert!(cart.is_empty());
    assert_eq!(format_price(cart.total_cents()), "₪0.00");
}

#[test]
fn total_tracks_price_times_quantity() {
    let mut cart = Cart::new();
    let a = product(1, "A", "19.90");
    let b = product(2, "B", "3.35");
    cart.add(&a);
    cart.add(&b);
    cart.update_quantity(2, 4);
    assert_eq!(cart.total_cents(), 1990 + 335 * 4);

    cart.remove(1);
    let expected: i64 = cart
        .lines()
        .iter()
        .map(|l| l.price_cents * i64::from(l.quantity))
        .sum();
    assert_eq!(cart.total_cents(), expected);
    assert_eq!(cart.item_count(), 4);
}

#[test]
fn cart_survives_reload() {
    let persistence = Persistence::new(MemoryStorage::new(), "ponpela_a11y");
    let mut cart = Cart::new();
    cart.add(&product(3, "שמן זית", "42.00"));
    cart.add(&product(3, "שמן זית", "42.00"));
    cart.add(&product(4, "Soap", "7.25"));
    persistence.save_cart(&cart).unwrap();

    let loaded = persistence.load_cart();
    assert_eq!(loaded, cart);
    assert_eq!(loaded.total_cents(), 4200 * 2 + 725);
}
