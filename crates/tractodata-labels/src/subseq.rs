//! Common substring helpers, used to derive submission identifiers from
//! sets of similarly named files.

/// Whether `find` is contained in every element of `data`.
///
/// Returns `false` when `data` is empty.
pub fn is_substring_of_all<S: AsRef<str>>(find: &str, data: &[S]) -> bool {
    !data.is_empty() && data.iter().all(|item| item.as_ref().contains(find))
}

/// Longest substring of the first element of `data` contained in all the
/// elements. Ties resolve to the earliest occurrence in the first element.
///
/// Empty when `data` has fewer than two elements.
pub fn longest_common_substring<S: AsRef<str>>(data: &[S]) -> String {
    let [first, _, ..] = data else {
        return String::new();
    };
    let first = first.as_ref();

    let mut longest = "";
    for (start, _) in first.char_indices() {
        let candidates = first[start..]
            .char_indices()
            .skip(1)
            .map(|(len, _)| start + len)
            .chain(std::iter::once(first.len()));
        for end in candidates {
            if end - start <= longest.len() {
                continue;
            }
            let candidate = &first[start..end];
            // A failing candidate cannot be extended into a common one.
            if !is_substring_of_all(candidate, data) {
                break;
            }
            longest = candidate;
        }
    }
    longest.to_string()
}
