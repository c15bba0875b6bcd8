//! Crate-internal helper macros.

/// Implements `Clone` and `Copy` for an adapter that carries a
/// `PhantomData` marker for an intermediate type.
///
/// `#[derive]` would bound the marker's type parameter as well, which
/// makes `Map<F, G, String>` non-`Copy` even when `F` and `G` are. Only the
/// stored parts are bounded here.
macro_rules! impl_clone_copy {
    ($adapter:ident<$($parameter:ident),+> { $($part:ident: $part_type:ident),+ ; $marker:ident }) => {
        impl<$($parameter),+> Clone for $adapter<$($parameter),+>
        where
            $($part_type: Clone),+
        {
            #[inline]
            fn clone(&self) -> Self {
                Self {
                    $($part: self.$part.clone(),)+
                    $marker: std::marker::PhantomData,
                }
            }
        }

        impl<$($parameter),+> Copy for $adapter<$($parameter),+> where $($part_type: Copy),+ {}
    };
}

pub(crate) use impl_clone_copy;
