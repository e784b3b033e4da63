use std::io::{self, Write};

use crate::header::RomHeader;
use crate::variant::BuildVariant;

const TITLE: &str = "The Legend of Zelda: Ocarina of Time";

/// Column at which the trailing comment of every directive line starts.
const COMMENT_COLUMN: usize = 29;

/// Writes `header` as assembler directives, one line per field, in wire
/// order. `region_override` replaces the decoded region byte in the
/// output only; the header itself is untouched.
pub fn emit<W: Write>(mut wtr: W, header: &RomHeader, region_override: Option<u8>) -> io::Result<()> {
    banner(&mut wtr, header.checksum1)?;

    let d = &header.domain1_reg;
    directive(
        &mut wtr,
        &format!(
            ".byte 0x{:02X}, 0x{:02X}, 0x{:02X}, 0x{:02X}",
            d[0], d[1], d[2], d[3]
        ),
        "PI BSD Domain 1 register",
    )?;
    word(&mut wtr, header.clock_rate, "Clockrate setting")?;
    word(&mut wtr, header.entry_point, "Entrypoint function (`entrypoint`)")?;
    word(&mut wtr, header.revision, "Revision")?;
    word(&mut wtr, header.checksum1, "Checksum1")?;
    word(&mut wtr, header.checksum2, "Checksum2")?;
    word(&mut wtr, header.unknown1, "Unknown")?;
    word(&mut wtr, header.unknown2, "Unknown")?;
    ascii(&mut wtr, &header.name, "Internal ROM name")?;
    word(&mut wtr, header.unknown3, "Unknown")?;
    word(&mut wtr, header.cart, "Cartridge")?;
    ascii(&mut wtr, &header.cart_id, "Cartridge ID")?;
    ascii(
        &mut wtr,
        &[region_override.unwrap_or(header.region)],
        "Region",
    )?;
    directive(&mut wtr, &format!(".byte 0x{:02X}", header.version), "Version")?;

    Ok(())
}

fn banner<W: Write>(wtr: &mut W, checksum1: u32) -> io::Result<()> {
    write!(wtr, "/*\n* {}", TITLE)?;
    if let Some(variant) = BuildVariant::detect(checksum1) {
        write!(wtr, " {}", variant.label())?;
    }
    write!(wtr, " ROM Header\n*/\n\n")
}

fn word<W: Write>(wtr: &mut W, value: u32, comment: &str) -> io::Result<()> {
    directive(wtr, &format!(".word 0x{:08X}", value), comment)
}

fn directive<W: Write>(wtr: &mut W, body: &str, comment: &str) -> io::Result<()> {
    writeln!(
        wtr,
        "{body:<width$}/* {comment} */",
        body = body,
        width = COMMENT_COLUMN,
        comment = comment
    )
}

// `bytes` may carry NUL padding or other non-printable data; it goes
// into the quoted literal verbatim, so the line is written piecewise
// rather than through a &str format.
fn ascii<W: Write>(wtr: &mut W, bytes: &[u8], comment: &str) -> io::Result<()> {
    wtr.write_all(b".ascii \"")?;
    wtr.write_all(bytes)?;
    wtr.write_all(b"\"")?;

    let body_len = ".ascii \"\"".len() + bytes.len();
    for _ in body_len..COMMENT_COLUMN {
        wtr.write_all(b" ")?;
    }

    writeln!(wtr, "/* {} */", comment)
}
