use crate::NodeRef;

pub fn is_non_rendering_element(node: &NodeRef) -> bool {
    node.is_element_named("head")
        || node.is_element_named("style")
        || node.is_element_named("script")
        || node.is_element_named("title")
        || node.is_element_named("meta")
        || node.is_element_named("link")
}

/// Elements that start and end their own line in flow layout.
pub fn is_block_element(node: &NodeRef) -> bool {
    let Some(name) = node.element_name() else {
        return false;
    };
    matches!(
        &*name,
        "html"
            | "body"
            | "p"
            | "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "li"
            | "ul"
            | "ol"
            | "pre"
            | "blockquote"
    )
}

pub fn outline_from_dom(root: &NodeRef, cap: usize) -> Vec<String> {
    fn walk(node: &NodeRef, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        if node.is_document() {
            out.push(format!("{indent}#document"));
        } else if let Some(name) = node.element_name() {
            out.push(format!("{indent}<{name}>"));
        } else if node.is_text() {
            let text = node.text().unwrap_or_default();
            out.push(format!("{indent}{text:?}"));
        } else if let Some(text) = node.text() {
            out.push(format!("{indent}<!--{text}-->"));
        }
        for child in node.children() {
            walk(&child, depth + 1, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn outline_lists_nodes_in_document_order() {
        let doc = Document::new();
        let p = doc.create_element("P");
        doc.root().append_child(&p).unwrap();
        p.append_child(&doc.create_text("ab")).unwrap();
        p.append_child(&doc.create_element("br")).unwrap();
        p.append_child(&doc.create_comment("c")).unwrap();

        assert_eq!(
            doc.outline(),
            "#document\n  <p>\n    \"ab\"\n    <br>\n    <!--c-->"
        );
    }

    #[test]
    fn outline_respects_cap() {
        let doc = Document::new();
        let p = doc.create_element("p");
        doc.root().append_child(&p).unwrap();
        p.append_child(&doc.create_text("x")).unwrap();
        assert_eq!(outline_from_dom(doc.root(), 2).len(), 2);
    }

    #[test]
    fn classifies_elements() {
        let doc = Document::new();
        assert!(is_non_rendering_element(&doc.create_element("script")));
        assert!(!is_non_rendering_element(&doc.create_element("p")));
        assert!(is_block_element(&doc.create_element("div")));
        assert!(!is_block_element(&doc.create_element("span")));
        assert!(!is_block_element(&doc.create_text("div")));
    }
}
