use std::collections::{BTreeMap, HashMap};

use sm_core::text::normalize_text;
use sm_core::{Article, Report, Sentiment};

/// Length cap of `Report::most_common_topics`
pub const MAX_COMMON_TOPICS: usize = 5;

/// Summarize sentiment labels and topics over an article set.
///
/// Articles that were never scored count as `Unknown`, and articles without
/// topics contribute none. Topic ties keep the order in which topics were first seen.
pub fn aggregate(articles: &[Article]) -> Report {
    let mut sentiment_distribution: BTreeMap<Sentiment, usize> = BTreeMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for article in articles {
        let sentiment = article.sentiment.unwrap_or(Sentiment::Unknown);
        *sentiment_distribution.entry(sentiment).or_insert(0) += 1;

        for topic in article.topics.iter().flatten() {
            let topic = normalize_text(topic);
            if topic.is_empty() {
                continue;
            }
            match positions.get(&topic) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    positions.insert(topic.clone(), counts.len());
                    counts.push((topic, 1));
                }
            }
        }
    }

    let unique_topics = counts.iter().map(|(topic, _)| topic.clone()).collect();

    // sort_by is stable, so equal counts stay in first-seen order
    let mut most_common_topics = counts;
    most_common_topics.sort_by(|a, b| b.1.cmp(&a.1));
    most_common_topics.truncate(MAX_COMMON_TOPICS);

    Report {
        sentiment_distribution,
        most_common_topics,
        unique_topics,
    }
}
