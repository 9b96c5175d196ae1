use libxml::tree::Node;
use libxml::xpath::Context;

use crate::error::ScraperError;

pub struct Util;

impl Util {
    pub fn evaluate_xpath(
        xpath_ctx: &Context,
        xpath: &str,
        throw_if_empty: bool,
    ) -> Result<Vec<Node>, ScraperError> {
        let res = xpath_ctx.evaluate(xpath).map_err(|()| {
            log::debug!("Evaluation of xpath '{}' failed", xpath);
            ScraperError::Xml
        })?;

        let node_vec = res.get_nodes_as_vec();

        if node_vec.is_empty() {
            log::debug!("Evaluation of xpath '{}' yielded no results", xpath);
            if throw_if_empty {
                return Err(ScraperError::Xml);
            }
        }

        Ok(node_vec)
    }

    pub fn extract_value(context: &Context, xpath: &str) -> Result<String, ScraperError> {
        let node_vec = Util::evaluate_xpath(context, xpath, false)?;
        if let Some(val) = node_vec.get(0) {
            return Ok(val.get_content());
        }

        Err(ScraperError::Xml)
    }

    pub fn strip_node(context: &Context, xpath: &str) -> Result<(), ScraperError> {
        let node_vec = Util::evaluate_xpath(context, xpath, false)?;
        let node_vec_clone = node_vec.clone();

        for mut node in node_vec {
            // an ancestor in the same result set takes the whole subtree with it
            if Self::parent_part_of_result(&node, &node_vec_clone) {
                continue;
            }

            node.unlink();
        }
        Ok(())
    }

    fn parent_part_of_result(node: &Node, xpath_result: &[Node]) -> bool {
        if let Some(parent) = node.get_parent() {
            for n in xpath_result {
                if n == &parent {
                    return true;
                }
            }

            return Self::parent_part_of_result(&parent, xpath_result);
        }

        false
    }
}
