// crates/eventdb-core/src/traits.rs

/// Anything that carries an identity and a city.
///
/// [`CityIndex`](crate::CityIndex) and [`filter_by_city`](crate::filter_by_city)
/// are generic over this trait, so callers can run them over their own event
/// records without converting into [`Event`](crate::Event) first.
///
/// The location is compared verbatim: no trimming, case folding or
/// transliteration happens anywhere in this crate.
///
/// # Examples
/// ```rust
/// use eventdb_core::traits::Located;
///
/// struct Gig { slug: &'static str, town: &'static str }
///
/// impl Located for Gig {
///     fn id(&self) -> &str { self.slug }
///     fn location(&self) -> &str { self.town }
/// }
///
/// let gig = Gig { slug: "g1", town: "Berlin, Germany" };
/// assert!(gig.is_in("Berlin, Germany"));
/// assert!(!gig.is_in("Berlin"));
/// ```
pub trait Located {
    /// Unique identifier within a catalog.
    fn id(&self) -> &str;

    /// The city string, exactly as stored.
    fn location(&self) -> &str;

    /// Exact equality against a selected city.
    #[inline]
    fn is_in(&self, city: &str) -> bool {
        self.location() == city
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn id(&self) -> &str {
        (**self).id()
    }

    #[inline]
    fn location(&self) -> &str {
        (**self).location()
    }
}
