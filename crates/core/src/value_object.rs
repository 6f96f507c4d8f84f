//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two with the same values are interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Requirement { ingredient: Kiwi, amount: 3 }`
///   equals any other requirement with the same fields)
/// - **Entity**: has identity (the stock record for `Kiwi` stays the same record
///   while its count changes)
///
/// Value objects are immutable; to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Portion {
///     grams: u32,
/// }
///
/// impl ValueObject for Portion {}
///
/// assert_eq!(Portion { grams: 200 }, Portion { grams: 200 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
