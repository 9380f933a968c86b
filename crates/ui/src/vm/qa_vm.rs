use primer_core::model::QaEntry;

/// Render-ready row for one Q&A accordion item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QaItemVm {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub code: Option<String>,
    pub illustration: Option<String>,
    pub expanded: bool,
}

/// Maps course entries plus the disclosure snapshot into accordion rows.
/// At most one row comes back expanded because the snapshot holds at most
/// one open index.
#[must_use]
pub fn map_qa_items(entries: &[QaEntry], expanded: Option<usize>) -> Vec<QaItemVm> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| QaItemVm {
            index,
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            code: entry.code.clone(),
            illustration: entry.illustration.clone(),
            expanded: expanded == Some(index),
        })
        .collect()
}
