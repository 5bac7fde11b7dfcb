//! Markdown rendering of structured answers

use crate::types::AnswerBlock;

/// Render blocks as markdown, separated by blank lines
pub fn to_markdown(blocks: &[AnswerBlock]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &AnswerBlock) -> String {
    match block {
        AnswerBlock::Heading { text } => format!("## {}", text),
        AnswerBlock::Paragraph { text } => text.clone(),
        AnswerBlock::Excerpt {
            index,
            document_name,
            text,
        } => format!("**{}. From \"{}\":**\n\n{}", index, document_name, text),
        AnswerBlock::Divider => "---".to_string(),
        AnswerBlock::Note { text } => format!("**Note:** {}", text),
        AnswerBlock::Suggestions { items } => {
            let bullets = items
                .iter()
                .map(|item| format!("• {}", item))
                .collect::<Vec<_>>()
                .join("\n");
            format!("**Suggestions:**\n\n{}", bullets)
        }
    }
}
