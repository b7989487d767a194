use crate::collection::VerseCollection;
use crate::commands::{CmdResult, EmotionCount};
use crate::error::Result;
use crate::model::{emotion_label, normalize, EMOTIONS};

/// The emotion menu with how many loaded verses each one has.
///
/// Emotions present in the data but missing from the menu are appended in the order
/// they first appear, so nothing in a custom data file is unreachable.
pub fn run(collection: &VerseCollection) -> Result<CmdResult> {
    let mut counts: Vec<EmotionCount> = EMOTIONS
        .iter()
        .map(|emotion| EmotionCount {
            emotion: emotion.to_string(),
            label: emotion_label(emotion),
            count: 0,
        })
        .collect();

    for verse in collection {
        let key = normalize(&verse.emotion);
        if key.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|c| c.emotion == key) {
            Some(entry) => entry.count += 1,
            None => counts.push(EmotionCount {
                label: emotion_label(&key),
                emotion: key,
                count: 1,
            }),
        }
    }

    Ok(CmdResult::default().with_emotions(counts))
}
