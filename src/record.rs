/// A value stored in a counting tree.
///
/// Only the key takes part in ordering. Two records with equal keys are still
/// distinct values and are both kept by the tree.
pub trait Record {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}

// scalars are their own key
macro_rules! impl_record_for_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Record for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> &Self::Key {
                    self
                }
            }
        )*
    };
}

impl_record_for_scalar!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    char,
    String,
    &'static str,
);

impl<K: Ord, V> Record for (K, V) {
    type Key = K;

    #[inline]
    fn key(&self) -> &Self::Key {
        &self.0
    }
}
