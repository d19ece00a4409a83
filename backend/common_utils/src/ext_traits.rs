//!
//! This module holds traits for extending functionalities for existing datatypes
//! & inbuilt datatypes.
//!

use error_stack::ResultExt;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{self, CustomResult};

///
/// Encode interface
/// An interface for serializing request payloads into the wire formats the gateway accepts
///
pub trait Encode<'e>
where
    Self: 'e + std::fmt::Debug,
{
    ///
    /// Functionality, for specifically encoding `Self` into an
    /// `application/x-www-form-urlencoded` string by using `serde_urlencoded`
    ///
    fn url_encode(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize;

    ///
    /// Functionality, for specifically encoding `Self` into an XML fragment
    /// whose outermost element is `root`
    ///
    fn encode_to_xml_with_root(&'e self, root: &str) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize;
}

impl<'e, A> Encode<'e> for A
where
    Self: 'e + std::fmt::Debug,
{
    fn url_encode(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize,
    {
        serde_urlencoded::to_string(self)
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| format!("Unable to url encode {self:?}"))
    }

    fn encode_to_xml_with_root(&'e self, root: &str) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize,
    {
        quick_xml::se::to_string_with_root(root, self)
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| format!("Unable to convert {self:?} to xml"))
    }
}

///
/// Extending functionalities of string slices holding XML documents
///
pub trait XmlExt {
    ///
    /// Convert an XML document into type `<T>` using `serde::Deserialize`
    ///
    fn parse_xml<T>(self) -> CustomResult<T, errors::ParsingError>
    where
        T: DeserializeOwned;
}

impl XmlExt for &str {
    fn parse_xml<T>(self) -> CustomResult<T, errors::ParsingError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str::<T>(self)
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| {
                format!("Unable to parse {} from xml", std::any::type_name::<T>())
            })
    }
}

///
/// Extending functionalities of `String` for performing parsing
///
pub trait StringExt<T> {
    ///
    /// Convert `String` into type `<T>` (which being an `enum`)
    ///
    fn parse_enum(self, enum_name: &str) -> CustomResult<T, errors::ParsingError>
    where
        T: std::str::FromStr,
        // Requirement for converting the `Err` variant of `FromStr` to `Report<Err>`
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static;
}

impl<T> StringExt<T> for String {
    fn parse_enum(self, enum_name: &str) -> CustomResult<T, errors::ParsingError>
    where
        T: std::str::FromStr,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        T::from_str(&self)
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| format!("Invalid enum variant {self:?} for enum {enum_name}"))
    }
}
