use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use eyre::WrapErr;
use structopt::StructOpt;

use zelda64_romheader as romheader;

const OUT_PATH: &str = "rom_header.s";

/// Rom header extraction tool. Reads the 64-byte header of a baserom
/// image and rewrites it as assembler directives in `rom_header.s`.
#[derive(Debug, StructOpt)]
#[structopt(name = "romheader")]
struct Opt {
    /// Relative path of the baserom, e.g. ../baserom.z64
    #[structopt(parse(from_os_str))]
    baserom: PathBuf,

    /// Force the region flag; the first character, uppercased, must be
    /// P, E or J (anything else is ignored)
    region: Option<String>,
}

fn main() -> eyre::Result<()> {
    let opt = Opt::from_args();

    let file = File::open(&opt.baserom)
        .wrap_err_with(|| format!("failed to open baserom image {}", opt.baserom.display()))?;
    let header = romheader::RomHeader::decode(BufReader::new(file))?;
    // The baserom is closed here; only now may the output be created.

    let region = opt.region.as_deref().and_then(romheader::region_override);
    if let Some(region) = region {
        eprintln!("Forcing region flag {}", region as char);
    }

    let out = File::create(OUT_PATH)
        .wrap_err_with(|| format!("failed to open {} for writing", OUT_PATH))?;
    let mut wtr = BufWriter::new(out);
    romheader::emit(&mut wtr, &header, region)?;
    wtr.flush()?;

    Ok(())
}
