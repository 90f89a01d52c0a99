//! Blog post pages with previous/next links

use super::{PageContext, PageRequest};
use crate::content::QueriedNode;

/// One page per post, each linked to the posts either side of it
///
/// `posts` must already be in ascending date order. The first post has no
/// previous post and the last has no next post.
pub fn build_blog_pages(posts: &[QueriedNode], template: &str) -> Vec<PageRequest> {
    posts
        .iter()
        .enumerate()
        .map(|(index, post)| {
            let previous_post_id = index
                .checked_sub(1)
                .and_then(|i| posts.get(i))
                .map(|p| p.id.clone());
            let next_post_id = posts.get(index + 1).map(|p| p.id.clone());

            PageRequest {
                path: post.slug.clone(),
                component: template.to_string(),
                context: PageContext::Post {
                    id: post.id.clone(),
                    previous_post_id,
                    next_post_id,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn posts(n: usize) -> Vec<QueriedNode> {
        (0..n)
            .map(|i| QueriedNode::new(format!("id-{}", i), format!("/post-{}/", i)))
            .collect()
    }

    fn neighbours(page: &PageRequest) -> (Option<&str>, Option<&str>) {
        match &page.context {
            PageContext::Post {
                previous_post_id,
                next_post_id,
                ..
            } => (previous_post_id.as_deref(), next_post_id.as_deref()),
            PageContext::Page { .. } => panic!("blog page without neighbours"),
        }
    }

    #[test]
    fn test_no_posts_no_pages() {
        assert!(build_blog_pages(&[], "blog-post.html").is_empty());
    }

    #[test]
    fn test_single_post_has_no_neighbours() {
        let pages = build_blog_pages(&posts(1), "blog-post.html");
        assert_eq!(pages.len(), 1);
        assert_eq!(neighbours(&pages[0]), (None, None));
        assert_eq!(pages[0].path, "/post-0/");
        assert_eq!(pages[0].component, "blog-post.html");
        assert_eq!(pages[0].context.id(), "id-0");
    }

    #[test]
    fn test_neighbours_link_adjacent_posts() {
        let pages = build_blog_pages(&posts(3), "blog-post.html");
        assert_eq!(neighbours(&pages[0]), (None, Some("id-1")));
        assert_eq!(neighbours(&pages[1]), (Some("id-0"), Some("id-2")));
        assert_eq!(neighbours(&pages[2]), (Some("id-1"), None));
    }

    #[test]
    fn test_every_length_links_only_adjacent_posts() {
        for n in 0..8 {
            let input = posts(n);
            let pages = build_blog_pages(&input, "t");
            assert_eq!(pages.len(), n);

            for (i, page) in pages.iter().enumerate() {
                let (prev, next) = neighbours(page);
                assert_eq!(prev.is_none(), i == 0);
                assert_eq!(next.is_none(), i + 1 == n);
                if let Some(prev) = prev {
                    assert_eq!(prev, input[i - 1].id);
                }
                if let Some(next) = next {
                    assert_eq!(next, input[i + 1].id);
                }
            }
        }
    }
}
