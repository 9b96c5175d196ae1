
use libxml::parser::Parser;
use libxml::tree::{node, Document, Node};
use libxml::xpath::Context;
use log::{debug, error};

use crate::error::ScraperError;
use crate::util::Util;

/// Class the Rouge highlighter puts on inline code spans.
const INLINE_CODE_CLASS: &str = "highlighter-rouge";

pub struct Extractor;

impl Extractor {
    /// Parse rendered HTML and return the page title and the raw text of the
    /// main content region.
    ///
    /// The title falls back to an empty string when the document has no
    /// `<title>`. A page without a `role="main"` element is an error.
    pub fn extract(html: &str) -> Result<(String, String), ScraperError> {
        // libxml 0.3.3 guards node mutation behind an Rc reference-count limit
        // (default 2). The rewrites below hold several live `Node` handles to
        // the same underlying element at once, so raise the guard as the
        // libxml bindings intend before touching the tree.
        node::set_node_rc_guard(16);

        let document = Self::parse_html(html)?;
        let context = Self::get_xpath_ctx(&document)?;

        let title = Self::extract_title(&context);

        let mut content_document = Document::new().map_err(|()| ScraperError::Xml)?;
        let mut content_root =
            Node::new("main", None, &content_document).map_err(|()| ScraperError::Xml)?;
        content_document.set_root_element(&content_root);

        Self::extract_content(&context, &mut content_root)?;

        let content_context = Self::get_xpath_ctx(&content_document)?;
        Self::apply_rewrites(&content_context, &content_document)?;

        Ok((title, content_root.get_content()))
    }

    fn parse_html(html: &str) -> Result<Document, ScraperError> {
        let parser = Parser::default_html();
        parser.parse_string(html).map_err(|err| {
            error!("Parsing HTML failed: {:?}", err);
            ScraperError::Xml
        })
    }

    fn get_xpath_ctx(document: &Document) -> Result<Context, ScraperError> {
        Context::new(document).map_err(|()| {
            error!("Failed to create xpath context");
            ScraperError::Xml
        })
    }

    fn extract_title(context: &Context) -> String {
        match Util::extract_value(context, "//title") {
            Ok(title) => title,
            Err(_) => {
                debug!("Document has no <title>, falling back to an empty title");
                String::new()
            }
        }
    }

    /// Move the first element with `role="main"` under `root` so every
    /// rewrite below is scoped to the content subtree.
    fn extract_content(context: &Context, root: &mut Node) -> Result<(), ScraperError> {
        let node_vec = Util::evaluate_xpath(context, "//*[@role='main']", false)?;
        let mut node = match node_vec.into_iter().next() {
            Some(node) => node,
            None => {
                error!("Page has no element with role 'main'");
                return Err(ScraperError::NoContent);
            }
        };

        node.unlink();
        root.add_child(&mut node).map_err(|_| {
            error!("Failed to re-root the content element");
            ScraperError::Xml
        })?;

        Ok(())
    }

    fn apply_rewrites(context: &Context, document: &Document) -> Result<(), ScraperError> {
        // Meta-comment links have to go while they are still <a> elements,
        // before the hyperlink unwrap below dissolves them.
        Util::strip_node(context, "//a[contains(@class, 'meta-comments')]")?;

        Self::unwrap_all(context, "//ul | //li | //a | //em")?;
        Self::unwrap_all(
            context,
            &format!("//code[contains(@class, '{}')]", INLINE_CODE_CLASS),
        )?;

        Util::strip_node(context, "//code | //table")?;
        Util::strip_node(context, "//div[contains(@class, 'syntaxhighlighter')]")?;

        Self::insert_block_breaks(context, document)
    }

    /// Replace every matched element with its children, keeping inner text
    /// and child order.
    fn unwrap_all(context: &Context, xpath: &str) -> Result<(), ScraperError> {
        let node_vec = Util::evaluate_xpath(context, xpath, false)?;
        for mut node in node_vec {
            for mut child in node.get_child_nodes() {
                child.unlink();
                node.add_prev_sibling(&mut child)
                    .map_err(|_| ScraperError::Xml)?;
            }
            node.unlink();
        }
        Ok(())
    }

    /// Put newline text nodes around the content of every paragraph and
    /// heading so block boundaries survive plain-text concatenation. The
    /// normalizer turns the doubled markers between adjacent blocks into a
    /// single blank line and trims the trailing one.
    fn insert_block_breaks(context: &Context, document: &Document) -> Result<(), ScraperError> {
        let node_vec =
            Util::evaluate_xpath(context, "//p | //h1 | //h2 | //h3 | //h4 | //h5", false)?;
        for mut node in node_vec {
            let mut leading = Node::new_text("\n", document).map_err(|()| ScraperError::Xml)?;
            match node.get_child_nodes().first() {
                Some(first) => {
                    let mut first = first.clone();
                    first
                        .add_prev_sibling(&mut leading)
                        .map_err(|_| ScraperError::Xml)?;
                }
                None => {
                    node.add_child(&mut leading).map_err(|_| ScraperError::Xml)?;
                }
            }

            let mut trailing = Node::new_text("\n", document).map_err(|()| ScraperError::Xml)?;
            node.add_child(&mut trailing)
                .map_err(|_| ScraperError::Xml)?;
        }
        Ok(())
    }
}
