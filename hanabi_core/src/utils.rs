use std::collections::BTreeSet;

pub trait SingleElement<T> {
    fn single_element(&self) -> Option<&T>;
}

impl<T> SingleElement<T> for BTreeSet<T> {
    fn single_element(&self) -> Option<&T> {
        match self.len() {
            1 => self.iter().next(),
            _ => None,
        }
    }
}
