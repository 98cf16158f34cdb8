/// Keys the engine reacts to; everything else is left to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl NavKey {
    /// Step the selection for this key over `count` candidates, without wrapping
    pub fn step(self, selected: Option<usize>, count: usize) -> Option<usize> {
        match (self, selected) {
            (NavKey::ArrowDown, None) if count > 0 => Some(0),
            (NavKey::ArrowDown, Some(i)) if i + 1 < count => Some(i + 1),
            (NavKey::ArrowUp, Some(0)) => None,
            (NavKey::ArrowUp, Some(i)) => Some(i - 1),
            (_, current) => current,
        }
    }
}
