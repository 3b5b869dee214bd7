use std::collections::BTreeMap;

/// String-keyed request parameters, as sent in a JSON object or as form fields
pub type Params = BTreeMap<String, String>;

/// One row of an option table: the wire key, whether the field is set, and
/// its string form.
pub struct Field<T> {
    pub key: &'static str,
    pub is_present: fn(&T) -> bool,
    pub extract: fn(&T) -> String,
}

/// Flatten the set fields of `bag` into parameters. Unset fields are omitted,
/// never sent as explicit falsy values.
pub fn flatten<T>(bag: &T, fields: &[Field<T>]) -> Params {
    fields
        .iter()
        .filter(|field| (field.is_present)(bag))
        .map(|field| (field.key.to_string(), (field.extract)(bag)))
        .collect()
}

/// A sparse set of per-method options backed by a declarative field table
pub trait OptionBag: Sized + 'static {
    const FIELDS: &'static [Field<Self>];

    fn to_params(&self) -> Params {
        flatten(self, Self::FIELDS)
    }

    /// Merge the set fields into an existing parameter map
    fn add_to(&self, params: &mut Params) {
        params.extend(self.to_params());
    }
}

fn flag<T>(_: &T) -> String {
    "true".to_string()
}

/// Options for `sendMessage`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessageOptions {
    pub disable_web_page_preview: bool,
    pub disable_notification: bool,
    /// 0 = not a reply
    pub reply_to_message_id: i64,
    /// JSON-serialized keyboard markup, passed through untouched
    pub reply_markup: String,
}

impl OptionBag for SendMessageOptions {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            key: "disable_web_page_preview",
            is_present: |o: &Self| o.disable_web_page_preview,
            extract: flag,
        },
        Field {
            key: "disable_notification",
            is_present: |o: &Self| o.disable_notification,
            extract: flag,
        },
        Field {
            key: "reply_to_message_id",
            is_present: |o: &Self| o.reply_to_message_id != 0,
            extract: |o: &Self| o.reply_to_message_id.to_string(),
        },
        Field {
            key: "reply_markup",
            is_present: |o: &Self| !o.reply_markup.is_empty(),
            extract: |o: &Self| o.reply_markup.clone(),
        },
    ];
}

/// Options shared by `sendPhoto` and `sendDocument`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMediaOptions {
    pub caption: String,
    /// "MarkdownV2", "HTML" or "Markdown"
    pub parse_mode: String,
    pub disable_notification: bool,
    pub reply_to_message_id: i64,
    pub reply_markup: String,
}

impl OptionBag for SendMediaOptions {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            key: "caption",
            is_present: |o: &Self| !o.caption.is_empty(),
            extract: |o: &Self| o.caption.clone(),
        },
        Field {
            key: "parse_mode",
            is_present: |o: &Self| !o.parse_mode.is_empty(),
            extract: |o: &Self| o.parse_mode.clone(),
        },
        Field {
            key: "disable_notification",
            is_present: |o: &Self| o.disable_notification,
            extract: flag,
        },
        Field {
            key: "reply_to_message_id",
            is_present: |o: &Self| o.reply_to_message_id != 0,
            extract: |o: &Self| o.reply_to_message_id.to_string(),
        },
        Field {
            key: "reply_markup",
            is_present: |o: &Self| !o.reply_markup.is_empty(),
            extract: |o: &Self| o.reply_markup.clone(),
        },
    ];
}
