use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

/// Conditional visibility: the field is shown only when the recorded answer
/// for `field_id` equals `equals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRule {
    pub field_id: String,
    pub equals: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<FieldOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<VisibilityRule>,
}

impl FormField {
    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub fn textarea(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Textarea)
    }

    pub fn select(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let mut field = Self::new(id, label, FieldKind::Select);
        field.options = options
            .iter()
            .map(|(label, value)| FieldOption {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();
        field
    }

    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        FormField {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            placeholder: None,
            required: false,
            options: Vec::new(),
            depends_on: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn depends_on(mut self, field_id: &str, equals: Value) -> Self {
        self.depends_on = Some(VisibilityRule {
            field_id: field_id.to_string(),
            equals,
        });
        self
    }

    /// Whether the field is shown given the answers recorded so far.
    pub fn is_visible(&self, answers: &Map<String, Value>) -> bool {
        match &self.depends_on {
            None => true,
            Some(rule) => answers.get(&rule.field_id) == Some(&rule.equals),
        }
    }

    /// Label for a stored select value; non-select answers pass through.
    pub fn display_answer(&self, answer: &Value) -> String {
        if let Value::String(raw) = answer {
            if let Some(option) = self.options.iter().find(|o| &o.value == raw) {
                return option.label.clone();
            }
            return raw.clone();
        }
        answer.to_string()
    }
}

/// The requirement-intake form the public page renders. Served over HTTP so
/// the frontend and the report renderer always agree on the field set.
pub fn requirement_form() -> Vec<FormField> {
    vec![
        FormField::text("projectName", "Project name")
            .required()
            .placeholder("What should we call the project?"),
        FormField::select(
            "projectType",
            "What kind of project is it?",
            &[
                ("Institutional website", "website"),
                ("Online store", "ecommerce"),
                ("Internal system / dashboard", "system"),
                ("Mobile app", "app"),
                ("Something else", "other"),
            ],
        )
        .required(),
        FormField::textarea("projectGoal", "What problem should it solve?")
            .required()
            .placeholder("Describe the main goal in a few sentences"),
        FormField::select(
            "hasDesign",
            "Do you already have a design?",
            &[("Yes", "yes"), ("No", "no")],
        )
        .required(),
        FormField::text("designLink", "Link to the design files")
            .required()
            .placeholder("Figma, Adobe XD, ...")
            .depends_on("hasDesign", Value::String("yes".to_string())),
        FormField::textarea("features", "Must-have features")
            .required()
            .placeholder("Login, payments, reports..."),
        FormField::textarea("integrations", "Integrations with other systems")
            .depends_on("projectType", Value::String("system".to_string())),
        FormField::select(
            "deadline",
            "When do you need it?",
            &[
                ("As soon as possible", "asap"),
                ("Within 1-3 months", "quarter"),
                ("Within 3-6 months", "semester"),
                ("No fixed date", "flexible"),
            ],
        )
        .required(),
        FormField::select(
            "budget",
            "Budget range",
            &[
                ("Up to R$ 5.000", "small"),
                ("R$ 5.000 - 20.000", "medium"),
                ("Above R$ 20.000", "large"),
                ("Not sure yet", "unknown"),
            ],
        ),
        FormField::textarea("references", "Reference sites or apps"),
    ]
}
