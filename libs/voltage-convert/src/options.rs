//! Codec defaults
//!
//! Callers that decode many points with the same byte order keep a
//! `CodecOptions` value around instead of repeating the order on every call.
//! The defaults are BigEndian + Signed; a point table or the environment can
//! override them.

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::bytes::{self, Endianness, Signedness};
use crate::error::{ConvertError, Result};

/// Environment variable prefix for overrides, e.g. `VOLTAGE_CONVERT_ENDIANNESS=CDAB`
pub const ENV_PREFIX: &str = "VOLTAGE_CONVERT_";

/// Byte order and signedness applied when none is given per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub endianness: Endianness,
    pub signedness: Signedness,
}

impl CodecOptions {
    pub fn new(endianness: Endianness, signedness: Signedness) -> Self {
        Self {
            endianness,
            signedness,
        }
    }

    /// Load options from multiple sources
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`VOLTAGE_CONVERT_*`)
    /// 2. `path`, if given (format chosen by extension)
    /// 3. Default values
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            let extension = path
                .extension()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ConvertError::config("Config file must have an extension"))?;

            figment = match extension {
                "toml" => figment.merge(Toml::file(path)),
                "yaml" | "yml" => figment.merge(Yaml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => {
                    return Err(ConvertError::config(format!(
                        "Unsupported config file format: {}",
                        extension
                    )))
                },
            };
        }

        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract options from a caller-assembled figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn decode_int8(&self, byte: &str) -> Result<i16> {
        bytes::decode_int8(byte, self.signedness)
    }

    pub fn decode_int16(&self, word: &str) -> Result<i32> {
        bytes::decode_int16(word, self.endianness, self.signedness)
    }

    pub fn encode_int16(&self, value: i32) -> Result<String> {
        bytes::encode_int16(value, self.endianness)
    }

    pub fn decode_int32(&self, dword: &str) -> Result<i64> {
        bytes::decode_int32(dword, self.endianness, self.signedness)
    }

    pub fn encode_int32(&self, value: i64) -> Result<String> {
        bytes::encode_int32(value, self.endianness)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_is_big_endian_signed() {
        let options = CodecOptions::default();
        assert_eq!(options.endianness, Endianness::BigEndian);
        assert_eq!(options.signedness, Signedness::Signed);
        assert_eq!(options.decode_int16("FFFF").unwrap(), -1);
    }

    #[test]
    fn test_from_figment_partial_override() {
        let figment = Figment::from(Serialized::defaults(CodecOptions::default()))
            .merge(Toml::string(r#"endianness = "CDAB""#));
        let options = CodecOptions::from_figment(figment).unwrap();

        assert_eq!(options.endianness, Endianness::MidLittleEndian);
        assert_eq!(options.signedness, Signedness::Signed);
        assert_eq!(options.decode_int32("56781234").unwrap(), 0x12345678);
        assert_eq!(options.encode_int32(0x12345678).unwrap(), "56781234");
    }

    #[test]
    fn test_from_figment_bad_value() {
        let figment = Figment::new().merge(Toml::string(r#"endianness = "ACBD""#));
        assert!(matches!(
            CodecOptions::from_figment(figment),
            Err(ConvertError::Config(_))
        ));
    }

    // Jail serializes env and cwd changes across tests that load from the environment
    #[test]
    fn test_load_from_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("codec.yaml", "endianness: little_endian\nsignedness: unsigned")?;

            let options = CodecOptions::load(Some(Path::new("codec.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(
                options,
                CodecOptions::new(Endianness::LittleEndian, Signedness::Unsigned)
            );
            assert_eq!(options.decode_int16("FFFF").unwrap(), 65535);
            assert_eq!(options.encode_int16(0x1234).unwrap(), "3412");
            assert_eq!(options.decode_int8("80").unwrap(), 128);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "codec.toml",
                r#"
                endianness = "little_endian"
                signedness = "unsigned"
                "#,
            )?;
            jail.set_env("VOLTAGE_CONVERT_ENDIANNESS", "CDAB");

            let options = CodecOptions::load(Some(Path::new("codec.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(
                options,
                CodecOptions::new(Endianness::MidLittleEndian, Signedness::Unsigned)
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults_without_file() {
        Jail::expect_with(|jail| {
            jail.set_env("VOLTAGE_CONVERT_SIGNEDNESS", "unsigned");

            let options = CodecOptions::load(None).map_err(|e| e.to_string())?;
            assert_eq!(options.endianness, Endianness::BigEndian);
            assert_eq!(options.signedness, Signedness::Unsigned);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = CodecOptions::load(Some(Path::new("codec.ini"))).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Config("Unsupported config file format: ini".to_string())
        );
    }

    #[test]
    fn test_word_swap_default_rejected_at_16_bits() {
        let options = CodecOptions::new(Endianness::MidBigEndian, Signedness::Signed);
        assert!(matches!(
            options.decode_int16("0001"),
            Err(ConvertError::UnsupportedEndianness { width: 16, .. })
        ));
        assert_eq!(options.decode_int32("34127856").unwrap(), 0x12345678);
    }
}
