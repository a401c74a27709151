// src/uri/identifier.rs
use crate::utils::longest_prefix_match;
use std::fmt;

/// Scheme prefixes for codes 0-35, indexed by code.
const PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

const RFU_PREFIX: &str = "RFU";

/// URI Identifier Code from the NFC Forum URI Record Type Definition
///
/// The first payload byte of a URI record. Codes 0-35 abbreviate a scheme
/// prefix; 36-255 are reserved for future use and kept as [`UriIdentifierCode::Rfu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UriIdentifierCode {
    #[default]
    UnAbridged,
    HttpWww,
    HttpsWww,
    Http,
    Https,
    Tel,
    MailTo,
    FtpAnonymous,
    FtpFtp,
    Ftps,
    Sftp,
    Smb,
    Nfs,
    Ftp,
    Dav,
    News,
    Telnet,
    Imap,
    Rtsp,
    Urn,
    Pop,
    Sip,
    Sips,
    Tftp,
    Btspp,
    Btl2cap,
    Btgoep,
    TcpObex,
    IrdaObex,
    File,
    UrnEpcId,
    UrnEpcTag,
    UrnEpcPat,
    UrnEpcRaw,
    UrnEpc,
    UrnNfc,
    Rfu(u8),
}

impl UriIdentifierCode {
    /// Named codes in ascending numeric order.
    pub const NAMED: [UriIdentifierCode; 36] = [
        UriIdentifierCode::UnAbridged,
        UriIdentifierCode::HttpWww,
        UriIdentifierCode::HttpsWww,
        UriIdentifierCode::Http,
        UriIdentifierCode::Https,
        UriIdentifierCode::Tel,
        UriIdentifierCode::MailTo,
        UriIdentifierCode::FtpAnonymous,
        UriIdentifierCode::FtpFtp,
        UriIdentifierCode::Ftps,
        UriIdentifierCode::Sftp,
        UriIdentifierCode::Smb,
        UriIdentifierCode::Nfs,
        UriIdentifierCode::Ftp,
        UriIdentifierCode::Dav,
        UriIdentifierCode::News,
        UriIdentifierCode::Telnet,
        UriIdentifierCode::Imap,
        UriIdentifierCode::Rtsp,
        UriIdentifierCode::Urn,
        UriIdentifierCode::Pop,
        UriIdentifierCode::Sip,
        UriIdentifierCode::Sips,
        UriIdentifierCode::Tftp,
        UriIdentifierCode::Btspp,
        UriIdentifierCode::Btl2cap,
        UriIdentifierCode::Btgoep,
        UriIdentifierCode::TcpObex,
        UriIdentifierCode::IrdaObex,
        UriIdentifierCode::File,
        UriIdentifierCode::UrnEpcId,
        UriIdentifierCode::UrnEpcTag,
        UriIdentifierCode::UrnEpcPat,
        UriIdentifierCode::UrnEpcRaw,
        UriIdentifierCode::UrnEpc,
        UriIdentifierCode::UrnNfc,
    ];

    pub const RFU_START: u8 = 36;

    pub fn from_u8(value: u8) -> Self {
        Self::NAMED
            .get(value as usize)
            .copied()
            .unwrap_or(UriIdentifierCode::Rfu(value))
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            UriIdentifierCode::Rfu(value) => *value,
            named => Self::NAMED
                .iter()
                .position(|code| code == named)
                .map_or(0, |index| index as u8),
        }
    }

    /// The literal prefix this code stands for. RFU codes expand to `"RFU"`.
    pub fn prefix(&self) -> &'static str {
        match self {
            UriIdentifierCode::Rfu(_) => RFU_PREFIX,
            named => PREFIXES[named.as_u8() as usize],
        }
    }

    /// Whether a hint of this code asks the encoder to abbreviate.
    ///
    /// `UnAbridged`, `Tel`, `MailTo` and the RFU range are bare codes and
    /// never trigger prefix stripping.
    pub fn is_protocol_bearing(&self) -> bool {
        !matches!(
            self,
            UriIdentifierCode::UnAbridged
                | UriIdentifierCode::Tel
                | UriIdentifierCode::MailTo
                | UriIdentifierCode::Rfu(_)
        )
    }

    /// The code whose prefix is the longest match at the start of `uri`,
    /// or `UnAbridged` when nothing matches.
    ///
    /// Every named code takes part, bare ones included. Ties go to the lowest
    /// code.
    pub fn longest_match(uri: &str) -> Self {
        let table = Self::NAMED
            .iter()
            .skip(1)
            .map(|code| (*code, code.prefix().as_bytes()));

        longest_prefix_match(uri.as_bytes(), table).unwrap_or(UriIdentifierCode::UnAbridged)
    }
}

impl fmt::Display for UriIdentifierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriIdentifierCode::UnAbridged => write!(f, "0x00 (unabridged)"),
            UriIdentifierCode::Rfu(value) => write!(f, "0x{:02X} (RFU)", value),
            code => write!(f, "0x{:02X} ({})", code.as_u8(), code.prefix()),
        }
    }
}

impl From<u8> for UriIdentifierCode {
    fn from(value: u8) -> Self {
        UriIdentifierCode::from_u8(value)
    }
}

impl From<UriIdentifierCode> for u8 {
    fn from(code: UriIdentifierCode) -> Self {
        code.as_u8()
    }
}
