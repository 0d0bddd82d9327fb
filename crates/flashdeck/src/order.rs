use rand::Rng;
use rand::seq::SliceRandom;

/// Fisher–Yates shuffle into a new vector; `order` is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(order: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = order.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
