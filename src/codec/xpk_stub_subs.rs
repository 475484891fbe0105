//! The remaining XPK sub-codec type codes that carry no unique logic in this crate: CBR0,
//! DLTA, FAST, FRLE, HUFF, MASH, NUKE, RLEN, SQSH. Each is a real, distinct historical XPK
//! sub-codec, but none has bit-level grammar disclosed to this crate (see `stub`), so unlike
//! RAKE/FRHT or NONE they are grouped into one file rather than one file per codec.

use crate::buffer::Buffer;
use crate::fourcc::fourcc;
use crate::subdecompressor::XpkSubDecompressor;

use super::stub::StubSubDecompressor;

macro_rules! xpk_stub_sub {
    ($detect_fn:ident, $create_fn:ident, $magic:expr, $name:expr) => {
        const FOURCC: u32 = fourcc($magic);

        pub fn $detect_fn(hdr: u32) -> bool {
            hdr == FOURCC
        }

        pub fn $create_fn<'a>(_payload: &'a dyn Buffer) -> Box<dyn XpkSubDecompressor + 'a> {
            Box::new(StubSubDecompressor::new($name))
        }
    };
}

pub mod cbr0 {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"CBR0", "XPK-CBR0");
}

pub mod dlta {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"DLTA", "XPK-DLTA");
}

pub mod fast {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"FAST", "XPK-FAST");
}

pub mod frle {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"FRLE", "XPK-FRLE");
}

pub mod huff {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"HUFF", "XPK-HUFF");
}

pub mod mash {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"MASH", "XPK-MASH");
}

pub mod nuke {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"NUKE", "XPK-NUKE");
}

pub mod rlen {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"RLEN", "XPK-RLEN");
}

pub mod sqsh {
    use super::*;
    xpk_stub_sub!(detect_header_xpk, create_xpk, b"SQSH", "XPK-SQSH");
}
