/// Generates a Deserialize implementation for the given type name using the FromStr
/// for the given type.
macro_rules! fromstr_deser {
    ($e:ty) => {
        impl<'de> ::serde::Deserialize<'de> for $e {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::str::FromStr::from_str(&s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Generates a Serialize implementation writing the Display form of the given type.
macro_rules! tostr_ser {
    ($e:ty) => {
        impl ::serde::Serialize for $e {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

/// A closed enumeration: every wire literal is listed, anything else fails to parse.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)*
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::DeserializationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)*
                    other => Err($crate::errors::DeserializationError::StringToEnumParseError {
                        enum_name: stringify!($name).to_string(),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        fromstr_deser! { $name }
        tostr_ser! { $name }

        impl $crate::wire::WireField for $name {
            fn matches_kind(value: &::serde_json::Value) -> bool {
                value.is_string()
            }
        }
    };
}

/// The well-known values of an open string enumeration.
///
/// Fields using it stay plain `String`s; the constants are only a reference for callers.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub mod $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $constant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub mod $name {
            $(
                $(#[doc = $doc])*
                pub const $constant: &str = $wire;
            )*

            pub const ALL: &[&str] = &[$($constant),*];

            /// Whether `value` is one of the documented values. Other values are just as valid on
            /// the wire.
            pub fn is_well_known(value: &str) -> bool {
                ALL.contains(&value)
            }
        }
    };
}

macro_rules! wire_rename {
    () => {
        None
    };
    ($wire:literal) => {
        Some($wire)
    };
}

/// Declares a message shape.
///
/// Fields typed `Option<_>` are optional, all others are required. Field names are sent in
/// camelCase unless an explicit wire name is given with `field as "wireName"`.
///
/// Besides the struct itself this generates its `Display` rendering, the `WireField` and
/// `MessageShape` impls used by the wire layer, and a `<Name>Builder`.
macro_rules! message {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                pub $field:ident $(as $wire:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(::serde::Serialize, ::serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
            #[serde(rename_all = "camelCase")]
            pub struct $name {
                $(
                    $(#[doc = $doc])*
                    $(#[serde(rename = $wire)])?
                    #[serde(skip_serializing_if = "crate::wire::is_absent")]
                    pub $field: $ty,
                )*
            }

            impl $name {
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::wire::render(
                        f,
                        stringify!($name),
                        &[$((stringify!($field), &self.$field as &dyn ::std::fmt::Debug)),*],
                    )
                }
            }

            impl $crate::wire::WireField for $name {
                fn matches_kind(value: &::serde_json::Value) -> bool {
                    value.is_object()
                }

                #[allow(unused_variables)]
                fn check_wire(
                    value: &::serde_json::Value,
                ) -> Result<(), $crate::errors::MissingRequiredFieldError> {
                    let Some(object) = value.as_object() else {
                        return Ok(());
                    };
                    $(
                        $crate::wire::check_field::<$ty>(
                            object,
                            stringify!($name),
                            $crate::wire::FieldSpec::new(
                                stringify!($field),
                                wire_rename!($($wire)?),
                                <$ty as $crate::wire::WireField>::REQUIRED,
                            ),
                        )?;
                    )*
                    Ok(())
                }
            }

            impl $crate::wire::MessageShape for $name {
                const SHAPE: &'static str = stringify!($name);
                const FIELDS: &'static [$crate::wire::FieldSpec] = &[
                    $(
                        $crate::wire::FieldSpec::new(
                            stringify!($field),
                            wire_rename!($($wire)?),
                            <$ty as $crate::wire::WireField>::REQUIRED,
                        ),
                    )*
                ];
            }

            #[derive(Debug, Clone, Default)]
            pub struct [<$name Builder>] {
                $( $field: Option<$ty>, )*
            }

            impl [<$name Builder>] {
                $(
                    $(#[doc = $doc])*
                    pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
                        self.$field = Some($field.into());
                        self
                    }
                )*

                /// Optional fields that were never set stay absent. A required field that was
                /// never set is reported as missing.
                pub fn build(self) -> Result<$name, $crate::errors::MissingRequiredFieldError> {
                    Ok($name {
                        $(
                            $field: match self.$field {
                                Some(value) => value,
                                None => <$ty as $crate::wire::WireField>::absent().ok_or_else(|| {
                                    $crate::errors::MissingRequiredFieldError::new(
                                        stringify!($name),
                                        $crate::wire::FieldSpec::new(
                                            stringify!($field),
                                            wire_rename!($($wire)?),
                                            true,
                                        )
                                        .wire_name(),
                                    )
                                })?,
                            },
                        )*
                    })
                }
            }
        }
    };
}

macro_rules! check_payload {
    ($content:ident;) => {
        Ok(())
    };
    ($content:ident; $payload:ty) => {
        <$payload as $crate::wire::WireField>::check_wire($content)
    };
}

macro_rules! payload_required {
    () => {
        false
    };
    ($payload:ty) => {
        <$payload as $crate::wire::WireField>::REQUIRED
    };
}

macro_rules! tagged_pattern {
    ($name:ident :: $variant:ident, $binding:ident;) => {
        $name::$variant
    };
    ($name:ident :: $variant:ident, $binding:ident; $payload:ty) => {
        $name::$variant($binding)
    };
}

macro_rules! serialize_payload {
    ($map:ident, $content:literal, $binding:ident;) => {};
    ($map:ident, $content:literal, $binding:ident; $payload:ty) => {
        if !$crate::wire::WireField::is_absent($binding) {
            $map.serialize_entry($content, $binding)?;
        }
    };
}

/// An enum whose variant is selected by a string tag next to its payload, like the `command`
/// and `arguments` keys of a request.
///
/// Deserialization uses serde's adjacent tagging. Serialization is written out so that an
/// absent optional payload leaves out the content key instead of writing `null`. Besides the
/// enum this generates `name()`, the wire tag of a value, and the `TaggedContent` impl the
/// envelopes use to check payloads.
macro_rules! tagged_enum {
    (
        $(#[doc = $enum_doc:literal])*
        #[serde(tag = $tag:literal, content = $content:literal)]
        pub enum $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident $(($payload:ty))? => $wire:literal
            ),* $(,)?
        }
    ) => {
        #[derive(::serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
        $(#[doc = $enum_doc])*
        #[serde(tag = $tag, content = $content)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                $variant $(($payload))?,
            )*
        }

        impl $name {
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant { .. } => $wire,)*
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry($tag, self.name())?;
                match self {
                    $(
                        tagged_pattern!($name::$variant, payload; $($payload)?) => {
                            serialize_payload!(map, $content, payload; $($payload)?);
                        }
                    )*
                }
                map.end()
            }
        }

        impl $crate::wire::TaggedContent for $name {
            fn content_required(name: &str) -> bool {
                match name {
                    $($wire => payload_required!($($payload)?),)*
                    _ => false,
                }
            }

            /// Unknown tags pass; the deserializer rejects them afterwards.
            fn check_content(
                name: &str,
                content: &::serde_json::Value,
            ) -> Result<(), $crate::errors::MissingRequiredFieldError> {
                match name {
                    $($wire => check_payload!(content; $($payload)?),)*
                    _ => Ok(()),
                }
            }
        }
    };
}
