use std::fmt;
use std::fmt::Formatter;
use crate::content::structs::content_id::ContentId;

impl ContentId {
    /// Shard index of this identifier in the swarm directory.
    #[inline]
    pub fn shard(&self) -> u8 {
        self.0[0]
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for ContentId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = ContentId([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for ContentId {
    fn from(data: [u8; 20]) -> Self {
        ContentId(data)
    }
}

impl serde::ser::Serialize for ContentId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for ContentId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct ContentIdVisitor;

        impl<'de> serde::de::Visitor<'de> for ContentIdVisitor {
            type Value = ContentId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v.len() != 40 {
                    return Err(E::custom("expected 40 character hex string"));
                }
                v.parse::<ContentId>().map_err(|_| E::custom("invalid hex character"))
            }
        }
        des.deserialize_str(ContentIdVisitor)
    }
}
