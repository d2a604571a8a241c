/// The base trait for any value that can live in a variable's domain.
///
/// Domains are stored as ordered persistent sets, so in addition to the usual
/// equality and hashing requirements a value must have a total order. The
/// order is what makes the solver deterministic: values are tried in
/// ascending order and iteration over a domain always yields the same
/// sequence. This is a marker trait; any type satisfying the bounds
/// implements it.
pub trait DomainValue:
    Clone + std::fmt::Debug + Eq + std::hash::Hash + Ord + 'static
{
}

impl<T> DomainValue for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + Ord + 'static {}
