use crate::error::{Error, Result};
use rand::{seq::index, Rng};

/// Randomize the order of `items` to the given degree.
///
/// `degree` distinct positions are chosen uniformly at random. Their items move to the front
/// in the order they were drawn, and the other items follow in their original order. So 0
/// keeps the order, and `items.len()` is a full shuffle.
pub fn randomize<T, G>(items: Vec<T>, degree: usize, rng: &mut G) -> Result<Vec<T>>
where
    G: Rng + ?Sized,
{
    let len = items.len();
    if degree > len {
        return Err(Error::DegreeOutOfRange { degree, len });
    }

    let picks = index::sample(rng, len, degree);

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut result = Vec::with_capacity(len);

    for idx in picks.iter() {
        result.extend(slots[idx].take());
    }
    result.extend(slots.into_iter().flatten());

    Ok(result)
}
