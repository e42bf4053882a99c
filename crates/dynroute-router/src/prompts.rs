// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed prompt templates for classification and for each tier.

use dynroute_core::{Category, ProviderMessage, Tier};

/// System instruction for the classification call.
pub const CLASSIFIER_INSTRUCTION: &str = "You are a precise and efficient Query Classifier. \
Your sole purpose is to analyze the user's query and classify it into one of three categories: \
'Simple', 'Medium', or 'Advanced'.

Your response MUST be ONLY ONE WORD from that list. Do not add any explanation or conversation.

## Classification Criteria:

**1. Analyze the query based on these heuristic rules:**
    - **Word Count:** Less than 10 words leans 'Simple'. Less than 50 leans 'Medium'. More than 50 leans 'Advanced'.
    - **Keywords:** 'Analyze', 'plan', 'code' suggest 'Advanced'. 'Explain', 'summarize' suggest 'Medium'. 'What is', 'translate' suggest 'Simple'.

**2. Use your intelligent judgment as the final deciding factor:**
    - The rules above are just a guide. Your primary goal is to evaluate the *actual complexity and intent* of the query.
    - **Example of overriding rules:** The query \"Solve a partial differential equation\" is very short, but it is extremely 'Advanced'. Your judgment must override the word count rule here.

Return only one word: 'Simple', 'Medium', or 'Advanced'.";

/// Worked examples shown to the classifier before the live query.
pub const CLASSIFIER_EXEMPLARS: &[(&str, Category)] = &[
    ("Translate 'Good morning' to Arabic", Category::Simple),
    (
        "Create a 6-month marketing plan for a new startup",
        Category::Advanced,
    ),
    ("Solve 2x^2 + 3x - 5 = 0", Category::Medium),
];

const SIMPLE_INSTRUCTION: &str = "You are a straightforward, factual assistant. \
Answer the user's question very concisely and directly in one or two sentences.";

const MEDIUM_INSTRUCTION: &str = "You are a helpful and clear assistant. \
Fulfill the user's request thoroughly and provide a well-structured answer.";

const ADVANCED_INSTRUCTION: &str = "You are a world-class strategic analyst and problem-solver. \
Your task is to analyze and provide a comprehensive, step-by-step solution for the following \
complex request. Let's think step-by-step before providing the final answer.";

/// The system instruction bound to a tier.
pub fn tier_instruction(tier: Tier) -> &'static str {
    match tier {
        Tier::Simple => SIMPLE_INSTRUCTION,
        Tier::Medium => MEDIUM_INSTRUCTION,
        Tier::Advanced => ADVANCED_INSTRUCTION,
    }
}

/// Render a tier's template: its system instruction, then the raw query.
pub fn tier_messages(tier: Tier, query: &str) -> Vec<ProviderMessage> {
    vec![
        ProviderMessage::system(tier_instruction(tier)),
        ProviderMessage::user(query),
    ]
}

/// Render the few-shot classification prompt ending with the live query.
pub fn classification_messages(query: &str) -> Vec<ProviderMessage> {
    let mut messages = Vec::with_capacity(2 + CLASSIFIER_EXEMPLARS.len() * 2);
    messages.push(ProviderMessage::system(CLASSIFIER_INSTRUCTION));
    for (example, label) in CLASSIFIER_EXEMPLARS {
        messages.push(ProviderMessage::user(quote_query(example)));
        messages.push(ProviderMessage::assistant(label.to_string()));
    }
    messages.push(ProviderMessage::user(quote_query(query)));
    messages
}

fn quote_query(query: &str) -> String {
    format!("Query: '{query}'")
}
