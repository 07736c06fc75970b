//! Prompt assembly for the generation tools
//!
//! Pure and stateless: a tool identifier, a map of caller-supplied field
//! values, and a language tag produce a single prompt string. Each tool is
//! a static table entry — which fields it reads, which endpoint serves it,
//! its token budget, and an English and an Arabic template.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::GenerationConfig;

/// Output language for generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// The four generation tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationTool {
    /// Marketing description for a product
    Description,
    /// Short social-media ad copy
    AdCopy,
    /// Price-range suggestion with reasoning
    Price,
    /// Three campaign ideas with channels
    Campaign,
}

impl GenerationTool {
    /// API path serving this tool
    pub fn endpoint(&self) -> &'static str {
        match self {
            GenerationTool::Description => "/api/ai/generate-description",
            GenerationTool::AdCopy => "/api/ai/generate-ad-copy",
            GenerationTool::Price => "/api/ai/suggest-price",
            GenerationTool::Campaign => "/api/ai/campaign-ideas",
        }
    }

    /// Generation parameters for this tool
    pub fn generation_config(&self) -> GenerationConfig {
        match self {
            GenerationTool::Campaign => GenerationConfig::new(512),
            _ => GenerationConfig::new(256),
        }
    }
}

/// Errors raised while assembling a prompt
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A single generation request, built per user action and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub tool: GenerationTool,
    pub language: Language,
    pub fields: BTreeMap<String, String>,
}

impl GenerationRequest {
    pub fn new(tool: GenerationTool, language: Language) -> Self {
        Self {
            tool,
            language,
            fields: BTreeMap::new(),
        }
    }

    /// Set a field value
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a field value when present; blank values are treated as absent
    pub fn maybe_field(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                self.fields.insert(name.into(), value);
            }
        }
        self
    }

    fn required(&self, name: &'static str) -> Result<&str, PromptError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .ok_or(PromptError::MissingField(name))
    }

    fn optional(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Assemble the prompt text for this request
    pub fn build_prompt(&self) -> Result<String, PromptError> {
        match self.tool {
            GenerationTool::Description => self.description_prompt(),
            GenerationTool::AdCopy => self.ad_copy_prompt(),
            GenerationTool::Price => self.price_prompt(),
            GenerationTool::Campaign => self.campaign_prompt(),
        }
    }

    fn description_prompt(&self) -> Result<String, PromptError> {
        let product_name = self.required("productName")?;
        let category = self.optional("category");

        Ok(match self.language {
            Language::Ar => format!(
                "اكتب وصفاً تسويقياً جذاباً ومقنعاً للمنتج التالي باللغة العربية: {}{}. \
                 الوصف يجب أن يكون 2-3 جمل قصيرة ومؤثرة.",
                product_name,
                category
                    .map(|c| format!(" في فئة {}", c))
                    .unwrap_or_default(),
            ),
            Language::En => format!(
                "Write a compelling marketing description for the following product: {}{}. \
                 Keep it 2-3 sentences, engaging and persuasive.",
                product_name,
                category
                    .map(|c| format!(" in the {} category", c))
                    .unwrap_or_default(),
            ),
        })
    }

    fn ad_copy_prompt(&self) -> Result<String, PromptError> {
        let product_name = self.required("productName")?;
        let price = self.required("price")?;
        let offer = self.optional("offer");

        let mut lines = Vec::new();
        match self.language {
            Language::Ar => {
                lines.push("اكتب نص إعلاني قصير وجذاب للمنتج التالي باللغة العربية:".to_string());
                lines.push(format!("المنتج: {}", product_name));
                lines.push(format!("السعر: {}", price));
                if let Some(offer) = offer {
                    lines.push(format!("العرض: {}", offer));
                }
                lines.push(
                    "النص يجب أن يكون مناسباً للإعلان على وسائل التواصل الاجتماعي (2-3 جمل)."
                        .to_string(),
                );
            }
            Language::En => {
                lines.push("Write a short, catchy ad copy for the following product:".to_string());
                lines.push(format!("Product: {}", product_name));
                lines.push(format!("Price: {}", price));
                if let Some(offer) = offer {
                    lines.push(format!("Offer: {}", offer));
                }
                lines.push(
                    "Make it suitable for social media advertising (2-3 sentences).".to_string(),
                );
            }
        }
        Ok(lines.join("\n"))
    }

    fn price_prompt(&self) -> Result<String, PromptError> {
        let product_name = self.required("productName")?;
        let description = self.optional("description");
        let category = self.optional("category");

        let mut lines = Vec::new();
        match self.language {
            Language::Ar => {
                lines.push("اقترح نطاق سعري مناسب للمنتج التالي مع شرح موجز:".to_string());
                lines.push(format!("المنتج: {}", product_name));
                if let Some(description) = description {
                    lines.push(format!("الوصف: {}", description));
                }
                if let Some(category) = category {
                    lines.push(format!("الفئة: {}", category));
                }
                lines.push("أعطني السعر المقترح بالدولار مع شرح مختصر (2-3 جمل).".to_string());
            }
            Language::En => {
                lines.push(
                    "Suggest a suitable price range for the following product with a brief explanation:"
                        .to_string(),
                );
                lines.push(format!("Product: {}", product_name));
                if let Some(description) = description {
                    lines.push(format!("Description: {}", description));
                }
                if let Some(category) = category {
                    lines.push(format!("Category: {}", category));
                }
                lines.push(
                    "Give me the suggested price in USD with a brief explanation (2-3 sentences)."
                        .to_string(),
                );
            }
        }
        Ok(lines.join("\n"))
    }

    fn campaign_prompt(&self) -> Result<String, PromptError> {
        let product_name = self.required("productName")?;
        let target_audience = self.optional("targetAudience");

        let mut lines = Vec::new();
        match self.language {
            Language::Ar => {
                lines.push("اقترح 3 أفكار لحملات تسويقية للمنتج التالي باللغة العربية:".to_string());
                lines.push(format!("المنتج: {}", product_name));
                if let Some(audience) = target_audience {
                    lines.push(format!("الجمهور المستهدف: {}", audience));
                }
                lines.push(
                    "كل فكرة يجب أن تتضمن: عنوان الحملة، الفكرة الرئيسية، والقناة المقترحة (فيسبوك، إنستغرام، واتساب، إلخ)."
                        .to_string(),
                );
            }
            Language::En => {
                lines.push(
                    "Suggest 3 marketing campaign ideas for the following product:".to_string(),
                );
                lines.push(format!("Product: {}", product_name));
                if let Some(audience) = target_audience {
                    lines.push(format!("Target Audience: {}", audience));
                }
                lines.push(
                    "Each idea should include: campaign title, main concept, and suggested channel (Facebook, Instagram, WhatsApp, etc.)."
                        .to_string(),
                );
            }
        }
        Ok(lines.join("\n"))
    }
}
