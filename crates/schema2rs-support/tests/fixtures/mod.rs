//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Source: query.schema.json
//! Generated by `schema2rs`

/// Search query.
#[derive(Debug, PartialEq)]
pub struct Query {
    name: String,
    limit: i64,
    tags: Option<Vec<String>>,
    code: Option<crate::fixtures::QueryCode>,
    value: Option<crate::fixtures::QueryValue>,
    nick: Option<String>,
    pick: Option<crate::fixtures::QueryPick>,
}
impl Query {
    /// Schema every decoded value is validated against.
    pub const SCHEMA: &'static str = "{\"title\":\"Search query.\",\"type\":\"object\",\"properties\":{\"name\":{\"type\":\"string\",\"minLength\":1},\"limit\":{\"type\":\"integer\",\"minimum\":1,\"default\":10000},\"tags\":{\"type\":\"array\",\"items\":{\"type\":\"string\"}},\"code\":{\"enum\":[1,\"2\",\"two\",null]},\"value\":{\"anyOf\":[{\"type\":\"integer\"},{\"type\":\"string\"}]},\"nick\":{\"type\":[\"string\",\"null\"]},\"pick\":{\"anyOf\":[{\"type\":\"object\",\"properties\":{\"foo\":{\"type\":\"string\"}},\"required\":[\"foo\"]},{\"type\":\"object\",\"properties\":{\"foo\":{\"type\":\"string\"},\"bar\":{\"type\":\"string\"}},\"required\":[\"foo\",\"bar\"]}]}},\"required\":[\"name\",\"nick\"]}";
    pub fn new(name: String, nick: Option<String>) -> Self {
        Self {
            name,
            limit: 10000,
            tags: None,
            code: None,
            value: None,
            nick,
            pick: None,
        }
    }
    /// Type: `string`
    pub fn name(&self) -> &String {
        &self.name
    }
    /// Type: `integer`
    pub fn limit(&self) -> i64 {
        self.limit
    }
    /// Type: `array<string> | null`
    pub fn tags(&self) -> Option<&Vec<String>> {
        self.tags.as_ref()
    }
    /// Type: `QueryCode | null`
    pub fn code(&self) -> Option<crate::fixtures::QueryCode> {
        self.code
    }
    /// Type: `integer | string | null`
    pub fn value(&self) -> Option<&crate::fixtures::QueryValue> {
        self.value.as_ref()
    }
    /// Type: `string | null`
    pub fn nick(&self) -> Option<&String> {
        self.nick.as_ref()
    }
    /// Type: `QueryPickAlternative1 | QueryPickAlternative2 | null`
    pub fn pick(&self) -> Option<&crate::fixtures::QueryPick> {
        self.pick.as_ref()
    }
    pub fn with_name(
        self,
        name: String,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "name",
            &::schema2rs_support::serde_json::Value::String(name.clone()),
        )?;
        Ok(Self { name, ..self })
    }
    pub fn with_limit(
        self,
        limit: i64,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "limit",
            &::schema2rs_support::serde_json::Value::from(limit),
        )?;
        Ok(Self { limit, ..self })
    }
    #[must_use]
    pub fn without_limit(self) -> Self {
        Self { limit: 10000, ..self }
    }
    pub fn with_tags(
        self,
        tags: Vec<String>,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "tags",
            &::schema2rs_support::encode::list(
                &tags,
                |item| ::schema2rs_support::serde_json::Value::String(item.clone()),
            ),
        )?;
        Ok(Self { tags: Some(tags), ..self })
    }
    #[must_use]
    pub fn without_tags(self) -> Self {
        Self { tags: None, ..self }
    }
    #[must_use]
    pub fn with_code(self, code: crate::fixtures::QueryCode) -> Self {
        Self { code: Some(code), ..self }
    }
    #[must_use]
    pub fn without_code(self) -> Self {
        Self { code: None, ..self }
    }
    #[must_use]
    pub fn with_value(self, value: crate::fixtures::QueryValue) -> Self {
        Self { value: Some(value), ..self }
    }
    #[must_use]
    pub fn without_value(self) -> Self {
        Self { value: None, ..self }
    }
    pub fn with_nick(
        self,
        nick: Option<String>,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "nick",
            &match &nick {
                Some(value) => ::schema2rs_support::serde_json::Value::String(value.clone()),
                None => ::schema2rs_support::serde_json::Value::Null,
            },
        )?;
        Ok(Self { nick, ..self })
    }
    #[must_use]
    pub fn with_pick(self, pick: crate::fixtures::QueryPick) -> Self {
        Self { pick: Some(pick), ..self }
    }
    #[must_use]
    pub fn without_pick(self) -> Self {
        Self { pick: None, ..self }
    }
    /// Decodes `input`, validating it against [`Self::SCHEMA`] first when `validate` is set.
    #[allow(unused_variables)]
    pub fn build_from_input(
        input: &::schema2rs_support::serde_json::Value,
        validate: bool,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        if validate {
            Self::validate_input(input)?;
        }
        let object = ::schema2rs_support::decode::object(input)?;
        Ok(Self {
            name: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    ::schema2rs_support::decode::string(
                        ::schema2rs_support::decode::required(object, "name")?,
                    )?,
                )
            })()
                .map_err(|error| error.at("name"))?,
            limit: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    match object.get("limit") {
                        Some(raw) => ::schema2rs_support::decode::integer(raw)?,
                        None => 10000,
                    },
                )
            })()
                .map_err(|error| error.at("limit"))?,
            tags: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    match object.get("tags") {
                        Some(raw) => Some(
                            ::schema2rs_support::decode::array(raw)?
                                .iter()
                                .map(|item| -> Result<
                                    _,
                                    ::schema2rs_support::ValidationError,
                                > { Ok(::schema2rs_support::decode::string(item)?) })
                                .collect::<Result<Vec<_>, _>>()?,
                        ),
                        None => None,
                    },
                )
            })()
                .map_err(|error| error.at("tags"))?,
            code: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    match object.get("code") {
                        Some(raw) if !raw.is_null() => Some(crate::fixtures::QueryCode::from_json(raw)?),
                        _ => None,
                    },
                )
            })()
                .map_err(|error| error.at("code"))?,
            value: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    match object.get("value") {
                        Some(raw) => Some(
                            crate::fixtures::QueryValue::build_from_input(raw, validate)?,
                        ),
                        None => None,
                    },
                )
            })()
                .map_err(|error| error.at("value"))?,
            nick: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    match ::schema2rs_support::decode::required(object, "nick")? {
                        raw if raw.is_null() => None,
                        raw => Some(::schema2rs_support::decode::string(raw)?),
                    },
                )
            })()
                .map_err(|error| error.at("nick"))?,
            pick: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    match object.get("pick") {
                        Some(raw) => Some(
                            crate::fixtures::QueryPick::build_from_input(raw, validate)?,
                        ),
                        None => None,
                    },
                )
            })()
                .map_err(|error| error.at("pick"))?,
        })
    }
    pub fn validate_input(
        input: &::schema2rs_support::serde_json::Value,
    ) -> Result<(), ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate(Self::SCHEMA, input)
    }
    pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value {
        let mut output = ::schema2rs_support::serde_json::Map::new();
        output
            .insert(
                "name".to_owned(),
                ::schema2rs_support::serde_json::Value::String(self.name.clone()),
            );
        output
            .insert(
                "limit".to_owned(),
                ::schema2rs_support::serde_json::Value::from(self.limit),
            );
        if let Some(value) = self.tags.as_ref() {
            output
                .insert(
                    "tags".to_owned(),
                    ::schema2rs_support::encode::list(
                        value,
                        |item| ::schema2rs_support::serde_json::Value::String(
                            item.clone(),
                        ),
                    ),
                );
        }
        if let Some(value) = self.code.as_ref() {
            output.insert("code".to_owned(), value.to_json());
        }
        if let Some(value) = self.value.as_ref() {
            output.insert("value".to_owned(), value.to_json());
        }
        output
            .insert(
                "nick".to_owned(),
                match &self.nick {
                    Some(value) => ::schema2rs_support::serde_json::Value::String(value.clone()),
                    None => ::schema2rs_support::serde_json::Value::Null,
                },
            );
        if let Some(value) = self.pick.as_ref() {
            output.insert("pick".to_owned(), value.to_json());
        }
        ::schema2rs_support::serde_json::Value::Object(output)
    }
}
impl Clone for Query {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            limit: self.limit,
            tags: self.tags.as_ref().map(|inner| inner.clone()),
            code: self.code,
            value: self.value.as_ref().map(|inner| inner.clone()),
            nick: self.nick.as_ref().map(|inner| inner.clone()),
            pick: self.pick.as_ref().map(|inner| inner.clone()),
        }
    }
}
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCode {
    VALUE_1,
    VALUE_2,
    VALUE_TWO,
}
impl QueryCode {
    /// Every case, in declaration order.
    pub const ALL: [Self; 3usize] = [Self::VALUE_1, Self::VALUE_2, Self::VALUE_TWO];
    pub fn try_from_json(value: &::schema2rs_support::serde_json::Value) -> Option<Self> {
        Self::ALL.into_iter().find(|case| &case.to_json() == value)
    }
    pub fn from_json(
        value: &::schema2rs_support::serde_json::Value,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        Self::try_from_json(value)
            .ok_or_else(|| ::schema2rs_support::ValidationError::new(
                format!("{} {}", value, "is not a valid QueryCode"),
            ))
    }
    pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value {
        match self {
            Self::VALUE_1 => ::schema2rs_support::serde_json::Value::from(1i64),
            Self::VALUE_2 => ::schema2rs_support::serde_json::Value::String("2".to_owned()),
            Self::VALUE_TWO => ::schema2rs_support::serde_json::Value::String("two".to_owned()),
        }
    }
}
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Alternative1(i64),
    Alternative2(String),
    Unmatched(::schema2rs_support::serde_json::Value),
}
impl QueryValue {
    /// Decodes `input` as the first alternative whose shape accepts it.
    #[allow(unused_variables)]
    pub fn build_from_input(
        input: &::schema2rs_support::serde_json::Value,
        validate: bool,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        if ::schema2rs_support::decode::is_integer(input) {
            return Ok(Self::Alternative1(::schema2rs_support::decode::integer(input)?));
        }
        if (input).is_string() {
            return Ok(Self::Alternative2(::schema2rs_support::decode::string(input)?));
        }
        Ok(Self::Unmatched(input.clone()))
    }
    /// Whether any alternative accepts `input`.
    pub fn matches_input(input: &::schema2rs_support::serde_json::Value) -> bool {
        ::schema2rs_support::decode::is_integer(input) || (input).is_string()
    }
    pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value {
        match self {
            Self::Alternative1(value) => ::schema2rs_support::serde_json::Value::from(*value),
            Self::Alternative2(value) => ::schema2rs_support::serde_json::Value::String(value.clone()),
            Self::Unmatched(value) => value.clone(),
        }
    }
}
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPick {
    Alternative1(crate::fixtures::QueryPickAlternative1),
    Alternative2(crate::fixtures::QueryPickAlternative2),
    Unmatched(::schema2rs_support::serde_json::Value),
}
impl QueryPick {
    /// Decodes `input` as the first alternative whose shape accepts it.
    #[allow(unused_variables)]
    pub fn build_from_input(
        input: &::schema2rs_support::serde_json::Value,
        validate: bool,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        if crate::fixtures::QueryPickAlternative1::validate_input(input).is_ok() {
            return Ok(
                Self::Alternative1(
                    crate::fixtures::QueryPickAlternative1::build_from_input(
                        input,
                        validate,
                    )?,
                ),
            );
        }
        if crate::fixtures::QueryPickAlternative2::validate_input(input).is_ok() {
            return Ok(
                Self::Alternative2(
                    crate::fixtures::QueryPickAlternative2::build_from_input(
                        input,
                        validate,
                    )?,
                ),
            );
        }
        Ok(Self::Unmatched(input.clone()))
    }
    /// Whether any alternative accepts `input`.
    pub fn matches_input(input: &::schema2rs_support::serde_json::Value) -> bool {
        crate::fixtures::QueryPickAlternative1::validate_input(input).is_ok()
            || crate::fixtures::QueryPickAlternative2::validate_input(input).is_ok()
    }
    pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value {
        match self {
            Self::Alternative1(value) => value.to_json(),
            Self::Alternative2(value) => value.to_json(),
            Self::Unmatched(value) => value.clone(),
        }
    }
}
#[derive(Debug, PartialEq)]
pub struct QueryPickAlternative1 {
    foo: String,
}
impl QueryPickAlternative1 {
    /// Schema every decoded value is validated against.
    pub const SCHEMA: &'static str = "{\"type\":\"object\",\"properties\":{\"foo\":{\"type\":\"string\"}},\"required\":[\"foo\"]}";
    pub fn new(foo: String) -> Self {
        Self { foo }
    }
    /// Type: `string`
    pub fn foo(&self) -> &String {
        &self.foo
    }
    pub fn with_foo(
        self,
        foo: String,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "foo",
            &::schema2rs_support::serde_json::Value::String(foo.clone()),
        )?;
        Ok(Self { foo, ..self })
    }
    /// Decodes `input`, validating it against [`Self::SCHEMA`] first when `validate` is set.
    #[allow(unused_variables)]
    pub fn build_from_input(
        input: &::schema2rs_support::serde_json::Value,
        validate: bool,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        if validate {
            Self::validate_input(input)?;
        }
        let object = ::schema2rs_support::decode::object(input)?;
        Ok(Self {
            foo: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    ::schema2rs_support::decode::string(
                        ::schema2rs_support::decode::required(object, "foo")?,
                    )?,
                )
            })()
                .map_err(|error| error.at("foo"))?,
        })
    }
    pub fn validate_input(
        input: &::schema2rs_support::serde_json::Value,
    ) -> Result<(), ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate(Self::SCHEMA, input)
    }
    pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value {
        let mut output = ::schema2rs_support::serde_json::Map::new();
        output
            .insert(
                "foo".to_owned(),
                ::schema2rs_support::serde_json::Value::String(self.foo.clone()),
            );
        ::schema2rs_support::serde_json::Value::Object(output)
    }
}
impl Clone for QueryPickAlternative1 {
    fn clone(&self) -> Self {
        Self { foo: self.foo.clone() }
    }
}
#[derive(Debug, PartialEq)]
pub struct QueryPickAlternative2 {
    foo: String,
    bar: String,
}
impl QueryPickAlternative2 {
    /// Schema every decoded value is validated against.
    pub const SCHEMA: &'static str = "{\"type\":\"object\",\"properties\":{\"foo\":{\"type\":\"string\"},\"bar\":{\"type\":\"string\"}},\"required\":[\"foo\",\"bar\"]}";
    pub fn new(foo: String, bar: String) -> Self {
        Self { foo, bar }
    }
    /// Type: `string`
    pub fn foo(&self) -> &String {
        &self.foo
    }
    /// Type: `string`
    pub fn bar(&self) -> &String {
        &self.bar
    }
    pub fn with_foo(
        self,
        foo: String,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "foo",
            &::schema2rs_support::serde_json::Value::String(foo.clone()),
        )?;
        Ok(Self { foo, ..self })
    }
    pub fn with_bar(
        self,
        bar: String,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate_property(
            Self::SCHEMA,
            "bar",
            &::schema2rs_support::serde_json::Value::String(bar.clone()),
        )?;
        Ok(Self { bar, ..self })
    }
    /// Decodes `input`, validating it against [`Self::SCHEMA`] first when `validate` is set.
    #[allow(unused_variables)]
    pub fn build_from_input(
        input: &::schema2rs_support::serde_json::Value,
        validate: bool,
    ) -> Result<Self, ::schema2rs_support::ValidationError> {
        if validate {
            Self::validate_input(input)?;
        }
        let object = ::schema2rs_support::decode::object(input)?;
        Ok(Self {
            foo: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    ::schema2rs_support::decode::string(
                        ::schema2rs_support::decode::required(object, "foo")?,
                    )?,
                )
            })()
                .map_err(|error| error.at("foo"))?,
            bar: (|| -> Result<_, ::schema2rs_support::ValidationError> {
                Ok(
                    ::schema2rs_support::decode::string(
                        ::schema2rs_support::decode::required(object, "bar")?,
                    )?,
                )
            })()
                .map_err(|error| error.at("bar"))?,
        })
    }
    pub fn validate_input(
        input: &::schema2rs_support::serde_json::Value,
    ) -> Result<(), ::schema2rs_support::ValidationError> {
        ::schema2rs_support::validate(Self::SCHEMA, input)
    }
    pub fn to_json(&self) -> ::schema2rs_support::serde_json::Value {
        let mut output = ::schema2rs_support::serde_json::Map::new();
        output
            .insert(
                "foo".to_owned(),
                ::schema2rs_support::serde_json::Value::String(self.foo.clone()),
            );
        output
            .insert(
                "bar".to_owned(),
                ::schema2rs_support::serde_json::Value::String(self.bar.clone()),
            );
        ::schema2rs_support::serde_json::Value::Object(output)
    }
}
impl Clone for QueryPickAlternative2 {
    fn clone(&self) -> Self {
        Self {
            foo: self.foo.clone(),
            bar: self.bar.clone(),
        }
    }
}
