//! 测试用经文数据

use std::sync::Arc;

use crate::domain::VerseIndex;

pub(crate) const SAMPLE_CORPUS: &str = r#"{
    "Genesis": {
        "1": {
            "1": "In the beginning God created the heaven and the earth.",
            "2": "And the earth was without form, and void; and darkness was upon the face of the deep.",
            "3": "And God said, Let there be light: and there was light.",
            "4": "And God saw the light, that it was good: and God divided the light from the darkness.",
            "5": "And God called the light Day, and the darkness he called Night."
        },
        "2": {
            "1": "Thus the heavens and the earth were finished, and all the host of them."
        }
    },
    "Psalms": {
        "23": {
            "1": "The LORD is my shepherd; I shall not want.",
            "2": "He maketh me to lie down in green pastures: he leadeth me beside the still waters.",
            "3": "He restoreth my soul."
        }
    },
    "John": {
        "1": {
            "1": "In the beginning was the Word, and the Word was with God, and the Word was God.",
            "5": "And the light shineth in darkness; and the darkness comprehended it not."
        }
    }
}"#;

pub(crate) fn sample_index() -> Arc<VerseIndex> {
    let corpus = serde_json::from_str(SAMPLE_CORPUS).unwrap();
    Arc::new(VerseIndex::new(corpus).unwrap())
}
