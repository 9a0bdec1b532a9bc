//! Image path rewriting.

use crate::error::{Error, Result};
use crate::model::Block;
use crate::parser::Patterns;

/// Resolve every image against the publish base path.
///
/// The path is always derived from the original tag, so running this twice
/// gives the same result. Returns the number of images resolved.
pub fn rewrite_images(blocks: &mut [Block], base: &str, patterns: &Patterns) -> Result<usize> {
    let mut count = 0;

    for block in blocks.iter_mut() {
        let Block::Image(image) = block else {
            continue;
        };

        let src = patterns
            .image_source
            .captures(&image.tag)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| Error::MalformedImage(image.tag.clone()))?;

        image.resolved = Some(join_path(base, src.as_str()));
        count += 1;
    }

    log::debug!("Rewrote {} images under '{}'", count, base);
    Ok(count)
}

/// Join URL path segments the POSIX way: an absolute `path` replaces `base`.
pub fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') || base.is_empty() {
        path.to_string()
    } else if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Image;

    fn image(tag: &str) -> Block {
        Block::Image(Image::new(tag))
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/static/doc", "a.png"), "/static/doc/a.png");
        assert_eq!(join_path("/static/doc/", "a.png"), "/static/doc/a.png");
        assert_eq!(join_path("/static/doc", "/abs/a.png"), "/abs/a.png");
        assert_eq!(join_path("", "a.png"), "a.png");
    }

    #[test]
    fn test_rewrite_wraps_image() {
        let patterns = Patterns::new();
        let mut blocks = vec![
            Block::paragraph("Text."),
            image("<img alt=\"\" src=\"image1.png\" />"),
        ];

        let count = rewrite_images(&mut blocks, "/static/report", &patterns).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            blocks[1].to_html(),
            "<a href=\"/static/report/image1.png\" target=\"_blank\">\
             <img src=\"/static/report/image1.png\" style=\"max-width:100%; height:auto;\" /></a>"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let patterns = Patterns::new();
        let mut blocks = vec![image("<img src=\"a.png\" />")];

        rewrite_images(&mut blocks, "/img", &patterns).unwrap();
        let first = blocks[0].to_html();
        rewrite_images(&mut blocks, "/img", &patterns).unwrap();

        assert_eq!(blocks[0].to_html(), first);
    }

    #[test]
    fn test_missing_src_is_malformed() {
        let patterns = Patterns::new();
        let mut blocks = vec![image("<img alt=\"x\" />")];

        let result = rewrite_images(&mut blocks, "/img", &patterns);
        assert!(matches!(result, Err(Error::MalformedImage(_))));
    }
}
