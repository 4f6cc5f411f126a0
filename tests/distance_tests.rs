use negcycle_apsp::{Distance, Error, Weight};
use ordered_float::OrderedFloat;

#[test]
fn test_infinity_orders_above_every_finite_value() {
    assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
    assert!(Distance::Finite(-5) < Distance::Finite(3));
    assert_eq!(Distance::<i32>::default(), Distance::Infinite);

    let mut distances = vec![Distance::Infinite, Distance::Finite(4), Distance::Finite(-1)];
    distances.sort();
    assert_eq!(distances, vec![Distance::Finite(-1), Distance::Finite(4), Distance::Infinite]);
}

#[test]
fn test_infinity_absorbs_additions() {
    let inf: Distance<i32> = Distance::Infinite;
    assert_eq!(inf.add_weight(-100), Ok(Distance::Infinite));
    assert_eq!(Distance::Finite(3).checked_add(inf), Ok(Distance::Infinite));
    assert_eq!(Distance::Finite(3).add_weight(-7), Ok(Distance::Finite(-4)));
    assert_eq!(Distance::zero().checked_add(Distance::Finite(2)), Ok(Distance::Finite(2)));
}

#[test]
fn test_finite_overflow_is_an_error() {
    assert_eq!(Distance::Finite(i32::MAX).add_weight(1), Err(Error::WeightOverflow));
    assert_eq!(
        Distance::Finite(OrderedFloat(f64::MAX)).add_weight(OrderedFloat(f64::MAX)),
        Err(Error::WeightOverflow)
    );
}

#[test]
fn test_accessors_and_display() {
    assert_eq!(Distance::Finite(7u8 as i16).finite(), Some(7));
    assert_eq!(Distance::<i16>::Infinite.finite(), None);
    assert!(Distance::from(2i64).is_finite());
    assert_eq!(Distance::Finite(12).to_string(), "12");
    assert_eq!(Distance::<i32>::Infinite.to_string(), "∞");
}

#[test]
fn test_float_weight_validity() {
    assert!(OrderedFloat(1.5f64).is_valid());
    assert!(!OrderedFloat(f64::NAN).is_valid());
    assert!(!OrderedFloat(f32::NEG_INFINITY).is_valid());
    assert!(5i32.is_valid());
    assert_eq!(OrderedFloat(1.0f64).checked_difference(OrderedFloat(3.0)), Some(OrderedFloat(-2.0)));
    assert_eq!(i8::MIN.checked_difference(1), None);
}

#[test]
fn test_priority_queue_pops_smallest_priority_first() {
    use negcycle_apsp::data_structures::BinaryHeapWrapper;

    let mut queue = BinaryHeapWrapper::with_capacity(4);
    queue.push(2usize, 7i64);
    queue.push(0, -3);
    queue.push(1, 7);
    queue.push(3, 0);

    assert_eq!(queue.pop(), Some((0, -3)));
    assert_eq!(queue.pop(), Some((3, 0)));
    assert_eq!(queue.pop(), Some((1, 7)));
    assert_eq!(queue.pop(), Some((2, 7)));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_wide_accumulation_narrows_back() {
    let sum = i64::MAX.widen() + 5i64.widen();
    assert_eq!(i64::narrow(sum), None);
    assert_eq!(i64::narrow(sum - 10), Some(i64::MAX - 5));
    assert_eq!(i8::narrow((-128i8).widen()), Some(-128));

    let wide = OrderedFloat(3.5f32).widen();
    assert_eq!(wide, OrderedFloat(3.5f64));
    assert_eq!(<OrderedFloat<f32>>::narrow(wide), Some(OrderedFloat(3.5f32)));
    assert_eq!(<OrderedFloat<f32>>::narrow(OrderedFloat(1e300)), None);
}
