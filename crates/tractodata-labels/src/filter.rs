//! Filtering of filename lists on label values.

use crate::label::{Label, label_value_pair};
use std::path::Path;

/// Elements of `primary` containing any element of `secondary`, in order.
pub fn filter_list_on_list<T, S>(primary: &[T], secondary: &[S]) -> Vec<T>
where
    T: AsRef<str> + Clone,
    S: AsRef<str>,
{
    primary
        .iter()
        .filter(|item| {
            let item: &str = (*item).as_ref();
            secondary.iter().any(|s| {
                let s: &str = s.as_ref();
                item.contains(s)
            })
        })
        .cloned()
        .collect()
}

/// Whether the base name of `fname` carries `pair` as a whole entity.
fn has_entity(fname: &Path, pair: &str) -> bool {
    let Some(base) = fname.file_name().and_then(|b| b.to_str()) else {
        return false;
    };
    base.split('_').any(|token| {
        token
            .strip_prefix(pair)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    })
}

/// Filenames carrying any of `values` for `label`.
///
/// Matches are appended value by value, in the order the values are given,
/// so the result is grouped by value. Duplicate filenames in the input are
/// kept.
pub fn filter_filenames_on_value<P, V>(fnames: &[P], label: Label, values: &[V]) -> Vec<P>
where
    P: AsRef<Path> + Clone,
    V: AsRef<str>,
{
    values
        .iter()
        .flat_map(|value| {
            let pair = label_value_pair(label, value.as_ref());
            fnames
                .iter()
                .filter(move |fname| has_entity(AsRef::<Path>::as_ref(*fname), &pair))
                .cloned()
        })
        .collect()
}
