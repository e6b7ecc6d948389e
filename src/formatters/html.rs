// ABOUTME: Server-rendered HTML for the intake form and the consultation result
// ABOUTME: Escapes every user-supplied value and renders display blocks as HTML elements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::renderer::{parse_document, DisplayBlock, HeadingSize};
use crate::constants::profile_bounds;
use crate::models::{NumericInput, ProfileRequest};
use html_escape::{encode_double_quoted_attribute, encode_text};

const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
];

const ACTIVITY_OPTIONS: &[(&str, &str)] = &[
    ("sedentary", "Sedentary (little/no exercise)"),
    ("light", "Light (1-3 days/week)"),
    ("moderate", "Moderate (3-5 days/week)"),
    ("active", "Active (6-7 days/week)"),
    ("very_active", "Very Active (athlete)"),
];

const GOAL_OPTIONS: &[(&str, &str)] = &[
    ("lose_weight", "Lose Weight"),
    ("maintain", "Maintain Weight"),
    ("gain_muscle", "Gain Muscle"),
    ("improve_fitness", "Improve Fitness"),
    ("improve_health", "Improve Overall Health"),
];

const CONSULTATION_OPTIONS: &[(&str, &str)] = &[
    ("both", "Fitness & Nutrition"),
    ("fitness", "Fitness Only"),
    ("nutrition", "Nutrition Only"),
];

const STYLE: &str = "body{font-family:system-ui,sans-serif;background:#f0fdf4;color:#1f2937;margin:0}\
main{max-width:56rem;margin:0 auto;padding:2rem 1rem}\
header,footer{text-align:center}footer{color:#6b7280;font-size:.875rem;margin-top:4rem}\
.card{background:#fff;border-radius:1rem;box-shadow:0 10px 25px rgba(0,0,0,.1);padding:2rem;margin-top:2rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:1.5rem}\
label{display:block;font-weight:500;margin-bottom:.5rem}\
input,select,textarea{width:100%;box-sizing:border-box;padding:.5rem 1rem;border:1px solid #d1d5db;border-radius:.5rem}\
.field{margin-top:1.5rem}button{margin-top:2rem;padding:.75rem 1.5rem;border:0;border-radius:.5rem;font-weight:700;cursor:pointer}\
.submit{width:100%;background:#10b981;color:#fff}.print{background:#f3f4f6}\
.text-2xl{font-size:1.5rem}.text-xl{font-size:1.25rem}.text-lg{font-size:1.125rem}.text-base{font-size:1rem}\
h1,h2,h3,h4{font-weight:700;margin:1.5rem 0 .75rem}li{margin:0 0 .5rem 1.5rem}p{margin:0 0 .75rem;line-height:1.6}\
@media print{form,header,footer,.print{display:none}}";

/// Values shown in the intake form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    /// Age field
    pub age: String,
    /// Weight field
    pub weight: String,
    /// Height field
    pub height: String,
    /// Selected gender
    pub gender: String,
    /// Selected activity level
    pub activity_level: String,
    /// Selected goal
    pub goal: String,
    /// Dietary restrictions text
    pub dietary_restrictions: String,
    /// Health conditions text
    pub health_conditions: String,
    /// Selected consultation type
    pub consultation_type: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            age: String::new(),
            weight: String::new(),
            height: String::new(),
            gender: "male".to_owned(),
            activity_level: "moderate".to_owned(),
            goal: "maintain".to_owned(),
            dietary_restrictions: String::new(),
            health_conditions: String::new(),
            consultation_type: "both".to_owned(),
        }
    }
}

fn numeric_text(value: Option<&NumericInput>) -> String {
    match value {
        Some(NumericInput::Number(n)) => n.to_string(),
        Some(NumericInput::Text(text)) => text.clone(),
        None => String::new(),
    }
}

impl From<&ProfileRequest> for FormValues {
    fn from(request: &ProfileRequest) -> Self {
        let defaults = Self::default();
        Self {
            age: numeric_text(request.age.as_ref()),
            weight: numeric_text(request.weight.as_ref()),
            height: numeric_text(request.height.as_ref()),
            gender: request.gender.clone().unwrap_or(defaults.gender),
            activity_level: request
                .activity_level
                .clone()
                .unwrap_or(defaults.activity_level),
            goal: request.goal.clone().unwrap_or(defaults.goal),
            dietary_restrictions: request.dietary_restrictions.clone(),
            health_conditions: request.health_conditions.clone(),
            consultation_type: request
                .consultation_type
                .clone()
                .unwrap_or(defaults.consultation_type),
        }
    }
}

/// Render display blocks as HTML fragments, one element per block
#[must_use]
pub fn render_blocks(blocks: &[DisplayBlock]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            DisplayBlock::Heading { level, text } => {
                let (tag, class) = match HeadingSize::for_level(*level) {
                    HeadingSize::Large => ("h1", "text-2xl"),
                    HeadingSize::Medium => ("h2", "text-xl"),
                    HeadingSize::Small => ("h3", "text-lg"),
                    HeadingSize::Base => ("h4", "text-base"),
                };
                html.push_str(&format!(
                    "<{tag} class=\"{class}\">{}</{tag}>\n",
                    encode_text(text)
                ));
            }
            DisplayBlock::ListItem { text } => {
                html.push_str(&format!("<li>{}</li>\n", encode_text(text)));
            }
            DisplayBlock::Break => html.push_str("<br>\n"),
            DisplayBlock::Paragraph { text } => {
                html.push_str(&format!("<p>{}</p>\n", encode_text(text)));
            }
        }
    }
    html
}

fn select(name: &str, label: &str, options: &[(&str, &str)], selected: &str) -> String {
    let mut html = format!(
        "<div><label for=\"{name}\">{label} *</label><select id=\"{name}\" name=\"{name}\" required>"
    );
    for (value, text) in options {
        let marker = if *value == selected { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{value}\"{marker}>{text}</option>"));
    }
    html.push_str("</select></div>\n");
    html
}

fn number_input(name: &str, label: &str, value: &str, bounds: (u32, u32), extra: &str) -> String {
    format!(
        "<div><label for=\"{name}\">{label} *</label><input type=\"number\" id=\"{name}\" \
         name=\"{name}\" value=\"{}\" required min=\"{}\" max=\"{}\"{extra}></div>\n",
        encode_double_quoted_attribute(value),
        bounds.0,
        bounds.1,
    )
}

fn textarea(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        "<div class=\"field\"><label for=\"{name}\">{label}</label><textarea id=\"{name}\" \
         name=\"{name}\" rows=\"3\" placeholder=\"{placeholder}\">{}</textarea></div>\n",
        encode_text(value)
    )
}

/// Render the intake form with the given values
#[must_use]
pub fn render_intake_form(values: &FormValues) -> String {
    let mut html = String::from(
        "<form class=\"card\" method=\"post\" action=\"/consultation\">\n<h2>Your Profile</h2>\n<div class=\"grid\">\n",
    );
    html.push_str(&number_input(
        "age",
        "Age",
        &values.age,
        (profile_bounds::AGE_MIN, profile_bounds::AGE_MAX),
        " placeholder=\"25\"",
    ));
    html.push_str(&number_input(
        "weight",
        "Weight (kg)",
        &values.weight,
        (profile_bounds::WEIGHT_MIN_KG, profile_bounds::WEIGHT_MAX_KG),
        " step=\"0.1\" placeholder=\"70\"",
    ));
    html.push_str(&number_input(
        "height",
        "Height (cm)",
        &values.height,
        (profile_bounds::HEIGHT_MIN_CM, profile_bounds::HEIGHT_MAX_CM),
        " placeholder=\"170\"",
    ));
    html.push_str(&select("gender", "Gender", GENDER_OPTIONS, &values.gender));
    html.push_str(&select(
        "activityLevel",
        "Activity Level",
        ACTIVITY_OPTIONS,
        &values.activity_level,
    ));
    html.push_str(&select("goal", "Primary Goal", GOAL_OPTIONS, &values.goal));
    html.push_str("</div>\n<div class=\"field\">");
    html.push_str(&select(
        "consultationType",
        "Consultation Type",
        CONSULTATION_OPTIONS,
        &values.consultation_type,
    ));
    html.push_str("</div>\n");
    html.push_str(&textarea(
        "dietaryRestrictions",
        "Dietary Restrictions or Preferences",
        &values.dietary_restrictions,
        "e.g., vegetarian, vegan, gluten-free, lactose intolerant...",
    ));
    html.push_str(&textarea(
        "healthConditions",
        "Health Conditions or Concerns",
        &values.health_conditions,
        "e.g., diabetes, high blood pressure, injuries...",
    ));
    html.push_str("<button class=\"submit\" type=\"submit\">Get AI Consultation</button>\n</form>\n");
    html
}

fn render_result_card(text: &str) -> String {
    format!(
        "<section class=\"card\" id=\"result\">\n<h2 class=\"text-2xl\">Your Personalized Plan</h2>\n\
         <div class=\"plan\">\n{}</div>\n\
         <button class=\"print\" type=\"button\" onclick=\"window.print()\">Print Plan</button>\n</section>\n",
        render_blocks(&parse_document(text))
    )
}

fn render_page(values: &FormValues, result: Option<&str>) -> String {
    let result_html = result.map(render_result_card).unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>AI Fitness &amp; Nutrition Coach</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n\
         <header>\n<h1>AI Fitness &amp; Nutrition Coach</h1>\n\
         <p>Get personalized fitness and nutrition advice</p>\n</header>\n\
         {}{result_html}\
         <footer>\n<p>This is for informational purposes only. Consult healthcare professionals \
         before making significant changes to your fitness or nutrition routine.</p>\n</footer>\n\
         </main>\n</body>\n</html>\n",
        render_intake_form(values)
    )
}

/// Landing page with an empty intake form
#[must_use]
pub fn render_intake_page() -> String {
    render_page(&FormValues::default(), None)
}

/// Page showing the submitted form and the rendered plan
#[must_use]
pub fn render_result_page(values: &FormValues, advice: &str) -> String {
    render_page(values, Some(advice))
}

/// Page showing the submitted form and `Error: <message>` in the result area
#[must_use]
pub fn render_error_page(values: &FormValues, message: &str) -> String {
    render_page(values, Some(&format!("Error: {message}")))
}
