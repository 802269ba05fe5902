use crate::models::post::Post;

/// Returns `true` if the post title contains `needle` (already lower-cased).
fn title_matches(post: &Post, needle: &str) -> bool {
    needle.is_empty() || post.title.to_lowercase().contains(needle)
}

/// Filter posts by a case-insensitive substring match on the title.
///
/// The result preserves the input order, so it is always a subsequence of
/// `posts`. An empty query keeps every post.
pub fn filter_by_title(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| title_matches(post, &needle))
        .cloned()
        .collect()
}
