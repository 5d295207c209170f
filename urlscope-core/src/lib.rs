/// A value that is built from a definition record, can be updated in place
/// from another definition, and projects back to one for serialization.
///
/// Patterns and headers both carry a raw form that has to survive
/// round-trips untouched, so `to_definition` must never normalize.
pub trait Property {
    type Definition;

    /// Name used when reporting or listing properties of this kind.
    const PROPERTY_NAME: &'static str;

    /// Re-applies a definition. Any derived state is rebuilt wholesale.
    fn update(&mut self, definition: Self::Definition);

    fn to_definition(&self) -> Self::Definition;

    fn is_disabled(&self) -> bool {
        false
    }
}

pub fn to_definitions<P: Property>(items: &[P]) -> Vec<P::Definition> {
    items.iter().map(Property::to_definition).collect()
}

pub fn enabled<P: Property>(items: &[P]) -> impl Iterator<Item = &P> {
    items.iter().filter(|item| !item.is_disabled())
}
