use fnv::FnvHashSet;

/// Merge a page's direct outbound links with its one-hop related pages into a
/// deduplicated, lower-cased title set.
///
/// A self-referencing link is not filtered here; the layout partition skips
/// the selected card by index, so it stays harmless.
pub fn resolve_links(direct: &[String], one_hop: &[String]) -> FnvHashSet<String> {
    let mut titles = FnvHashSet::default();
    for title in direct.iter().chain(one_hop.iter()) {
        titles.insert(title.to_lowercase());
    }
    titles
}
