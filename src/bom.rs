//! Incremental byte-order-mark sniffer.
//!
//! Fed the first bytes of a stream, possibly one at a time, until it can
//! say whether a Unicode BOM is present.

/// A recognised byte-order mark.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Bom {
    /// `EF BB BF`
    Utf8,
    /// `FE FF`
    Utf16Be,
    /// `FF FE`, not followed by `00 00`
    Utf16Le,
    /// `00 00 FE FF`
    Utf32Be,
    /// `FF FE 00 00`
    Utf32Le,
}

impl Bom {
    pub fn charset_name(self) -> &'static str {
        match self {
            Bom::Utf8 => "UTF-8-SIG",
            Bom::Utf16Be => "UTF-16BE",
            Bom::Utf16Le => "UTF-16LE",
            Bom::Utf32Be => "UTF-32BE",
            Bom::Utf32Le => "UTF-32LE",
        }
    }
}

/// A result of feeding data into [`BomSniffer`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SniffResult {
    /// The bytes so far are a prefix of some BOM.
    NeedData,
    Found(Bom),
    /// The stream does not start with a BOM.
    NoBom,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub enum BomSniffer {
    #[default]
    Empty,
    XEF,
    XEF_BB,
    XFE,
    XFF,
    XFF_FE,
    XFF_FE_00,
    X00,
    X00_00,
    X00_00_FE,
}

impl BomSniffer {
    pub fn feed(&mut self, bytes: &[u8]) -> SniffResult {
        for &byte in bytes {
            let (next, result) = match (*self, byte) {
                (Self::Empty, 0xEF) => (Self::XEF, None),
                (Self::Empty, 0xFE) => (Self::XFE, None),
                (Self::Empty, 0xFF) => (Self::XFF, None),
                (Self::Empty, 0x00) => (Self::X00, None),

                (Self::XEF, 0xBB) => (Self::XEF_BB, None),
                (Self::XEF_BB, 0xBF) => (Self::Empty, Some(SniffResult::Found(Bom::Utf8))),

                (Self::XFE, 0xFF) => (Self::Empty, Some(SniffResult::Found(Bom::Utf16Be))),

                (Self::XFF, 0xFE) => (Self::XFF_FE, None),
                (Self::XFF_FE, 0x00) => (Self::XFF_FE_00, None),
                (Self::XFF_FE, _) => (Self::Empty, Some(SniffResult::Found(Bom::Utf16Le))),
                (Self::XFF_FE_00, 0x00) => (Self::Empty, Some(SniffResult::Found(Bom::Utf32Le))),
                (Self::XFF_FE_00, _) => (Self::Empty, Some(SniffResult::Found(Bom::Utf16Le))),

                (Self::X00, 0x00) => (Self::X00_00, None),
                (Self::X00_00, 0xFE) => (Self::X00_00_FE, None),
                (Self::X00_00_FE, 0xFF) => (Self::Empty, Some(SniffResult::Found(Bom::Utf32Be))),

                _ => (Self::Empty, Some(SniffResult::NoBom)),
            };
            *self = next;
            if let Some(result) = result {
                return result;
            }
        }
        SniffResult::NeedData
    }

    /// Resolves a sniff cut short by the end of input.
    pub fn finish(self) -> SniffResult {
        match self {
            Self::XFF_FE | Self::XFF_FE_00 => SniffResult::Found(Bom::Utf16Le),
            _ => SniffResult::NoBom,
        }
    }
}
