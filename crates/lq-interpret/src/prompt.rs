//! Prompt construction for interpretation requests.
//!
//! Instructions are in Chinese to match the corpus. The output schema keeps
//! the backend honest about shape; contents are still validated after
//! parsing, never trusted.

use lq_core::Slip;
use serde_json::{Value, json};

/// System instruction establishing the interpreter persona.
pub fn system_instruction() -> String {
    "你是一位精通传统文化、佛学禅意与现代心理学的解签大师。\
     请严格按照要求的 JSON 结构返回解签内容，不要输出结构之外的任何文字。"
        .to_string()
}

/// User instruction embedding the slip under interpretation.
pub fn user_instruction(slip: &Slip) -> String {
    format!(
        "请针对观音灵签第{}签《{}》提供详尽的深度解签。\n\
         \n\
         签文数据：\n\
         诗文：{}\n\
         诗意：{}\n\
         解曰：{}\n\
         \n\
         要求：\n\
         1. insight：提供一段治愈心灵的现代禅意启示，约120字。\n\
         2. categories：必须严格提供且仅提供【事业】、【感情】、【财运】、【健康】四个维度的指引，每条约50-80字。\n\
         3. 语言风格：古雅与现代结合，语气温和。",
        slip.id, slip.title, slip.poetry, slip.meaning, slip.explanation
    )
}

/// JSON schema for the structured response.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "insight": {
                "type": "string",
                "description": "针对签意的现代禅悟启示，约120字。"
            },
            "categories": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": {
                            "type": "string",
                            "description": "只能是：事业、感情、财运、健康"
                        },
                        "content": {
                            "type": "string",
                            "description": "具体的深度解签建议，约50-80字"
                        }
                    },
                    "required": ["label", "content"]
                }
            }
        },
        "required": ["insight", "categories"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Slip {
        Slip {
            id: 8,
            title: "姜尚遇文王".to_string(),
            kind: "上签".to_string(),
            poetry: "磻溪一钓几经秋。".to_string(),
            meaning: "大器晚成。".to_string(),
            explanation: "迟中有成。".to_string(),
        }
    }

    #[test]
    fn user_instruction_embeds_slip_fields() {
        let prompt = user_instruction(&sample());
        assert!(prompt.contains("第8签"));
        assert!(prompt.contains("《姜尚遇文王》"));
        assert!(prompt.contains("磻溪一钓几经秋。"));
        assert!(prompt.contains("大器晚成。"));
        assert!(prompt.contains("迟中有成。"));
    }

    #[test]
    fn user_instruction_names_all_four_dimensions() {
        let prompt = user_instruction(&sample());
        for label in ["事业", "感情", "财运", "健康"] {
            assert!(prompt.contains(label), "missing {label}");
        }
    }

    #[test]
    fn schema_requires_insight_and_categories() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["insight", "categories"]);
        assert_eq!(
            schema["properties"]["categories"]["items"]["required"],
            serde_json::json!(["label", "content"])
        );
    }
}
