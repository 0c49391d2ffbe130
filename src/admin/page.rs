//! HTML status page

use askama::Template;

use crate::registry::Topic;

/// Publish form with the topic selector and a status box
#[derive(Template)]
#[template(path = "pubsub.html")]
pub struct PubSubPage {
    /// Topics offered in the selector
    pub topics: Vec<Topic>,
    /// Status text; escaped on render
    pub status: String,
}

/// Format topics as `[A, B, C]`
pub fn topic_list(topics: &[Topic]) -> String {
    let names: Vec<&str> = topics.iter().map(|topic| topic.name()).collect();
    format!("[{}]", names.join(", "))
}

/// Status shown when no topic was submitted
pub fn help_status(topics: &[Topic]) -> String {
    format!(
        "Topic is required, Message is optional.\nValid topics: {}",
        topic_list(topics)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_list() {
        assert_eq!(topic_list(&[]), "[]");
        assert_eq!(
            topic_list(&[Topic::ConfigRefresh, Topic::CacheInvalidate]),
            "[CONFIG_REFRESH, CACHE_INVALIDATE]"
        );
    }

    #[test]
    fn test_render_lists_topics() {
        let page = PubSubPage {
            topics: vec![Topic::ConfigRefresh, Topic::HdfsSyncNn],
            status: help_status(&[Topic::ConfigRefresh, Topic::HdfsSyncNn]),
        };
        let html = page.render().unwrap();

        assert!(html.contains("<option>CONFIG_REFRESH</option>"));
        assert!(html.contains("<option>HDFS_SYNC_NN</option>"));
        assert!(!html.contains("<option>CACHE_INVALIDATE</option>"));
        assert!(html.contains("Valid topics: [CONFIG_REFRESH, HDFS_SYNC_NN]"));
    }

    #[test]
    fn test_render_escapes_status() {
        let page = PubSubPage {
            topics: Vec::new(),
            status: "Submitted topic CONFIG_REFRESH, message <script>x</script>".to_string(),
        };
        let html = page.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("message &lt;script&gt;x&lt;"));
    }
}
