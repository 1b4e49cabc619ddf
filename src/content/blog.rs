use crate::content::post::Post;
use crate::content::source::{ContentSource, load_posts};

/// Published posts, newest first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct BlogIndex {
    pub posts: Vec<Post>,
}

/// What the blog area shows for the current route.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlogPage {
    Index { posts: Vec<Post> },
    Post { post: Post },
    NotFound { slug: String },
}

impl BlogIndex {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn load(source: &dyn ContentSource) -> Self {
        Self::new(load_posts(source))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn index_page(&self) -> BlogPage {
        BlogPage::Index {
            posts: self.posts.clone(),
        }
    }

    pub fn post_page(&self, slug: &str) -> BlogPage {
        match self.find(slug) {
            Some(post) => BlogPage::Post { post: post.clone() },
            None => BlogPage::NotFound {
                slug: slug.to_owned(),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/blog.rs"]
mod tests;
