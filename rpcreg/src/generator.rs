use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};
use tempfile::NamedTempFile;

use crate::identifier::param_names;
use crate::method_count::MethodCount;
use crate::params::GeneratorParams;

const MACRO_PREFIX: &str = "REGISTER_RPC_FUNCTIONS";
const TUPLE_OPEN: &str = "        return std::make_tuple(";

const HEADER_COMMENT: &str = r#"
/**
 * This is an automatically-generated file that makes it easier for user-created
 * Replicated Objects to register their RPC methods with Derecho by defining some
 * macros. Do not edit this file by hand; you should generate it with
 * generate-register-functions. The public interface is at the bottom of the
 * file.
 */

"#;

#[derive(Debug)]
pub enum GeneratorError {
    IoError(io::Error),
}

impl From<io::Error> for GeneratorError {
    fn from(e: io::Error) -> Self {
        Self::IoError(e)
    }
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GeneratorError::IoError(e) => Some(e),
        }
    }
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Returns the name of the registration macro supporting `count` methods.
///
/// The numeric suffix is the total number of macro arguments, class name
/// included, since that is what the dispatch macro counts.
///
/// # Example
/// ```
/// use rpcreg::generator::macro_name;
/// use rpcreg::method_count::MethodCount;
///
/// assert_eq!(macro_name(MethodCount::ONE), "REGISTER_RPC_FUNCTIONS2");
/// ```
#[must_use]
pub fn macro_name(count: MethodCount) -> String {
    format!("{}{}", MACRO_PREFIX, count.arg_num())
}

/// Streams the `register_rpc_functions.h` header into a writer.
#[derive(Debug)]
pub struct RegisterFunctionsWriter<W> {
    writer: W,
    params: GeneratorParams,
}

impl<W: Write> RegisterFunctionsWriter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_params(writer, GeneratorParams::default())
    }

    #[must_use]
    pub fn with_params(writer: W, params: GeneratorParams) -> Self {
        Self { writer, params }
    }

    /// Writes the complete header: the preamble, one registration macro for
    /// every method count from 1 to `max_count` and the dispatch macros.
    pub fn write_all_macros(&mut self, max_count: MethodCount) -> GeneratorResult<()> {
        self.output_preamble()?;
        for count in max_count.up_to() {
            self.write_register_macro(count)?;
        }
        self.output_footer()?;
        self.flush()?;

        Ok(())
    }

    /// Writes a single `REGISTER_RPC_FUNCTIONS<N>` definition for `count`
    /// methods.
    pub fn write_register_macro(&mut self, count: MethodCount) -> GeneratorResult<()> {
        let params = param_names(count);
        let name = macro_name(count);
        debug!("Generating {} ({} methods)", name, count);

        writeln!(
            &mut self.writer,
            "#define {}(classname, {}) \\",
            name,
            params.iter().join(", ")
        )?;
        writeln!(&mut self.writer, "    static auto register_functions() {{\\")?;
        self.output_tuple(&params)?;
        writeln!(&mut self.writer, "    }} ")?;

        Ok(())
    }

    fn output_tuple(&mut self, params: &[String]) -> GeneratorResult<()> {
        match params {
            [only] => {
                let tag = self.tag(only);
                writeln!(&mut self.writer, "{}{});\\", TUPLE_OPEN, tag)?;
            }
            [first, middle @ .., last] => {
                let indent = " ".repeat(TUPLE_OPEN.len());

                let tag = self.tag(first);
                writeln!(&mut self.writer, "{}{},\\", TUPLE_OPEN, tag)?;
                for param in middle {
                    let tag = self.tag(param);
                    writeln!(&mut self.writer, "{}{},\\", indent, tag)?;
                }
                let tag = self.tag(last);
                writeln!(&mut self.writer, "{}{});\\", indent, tag)?;
            }
            [] => unreachable!("MethodCount is never zero"),
        }

        Ok(())
    }

    fn tag(&self, param: &str) -> String {
        format!(
            "{}<{}({})::hash()>(& classname :: {})",
            self.params.tag_function, self.params.name_hash_macro, param, param
        )
    }

    fn output_preamble(&mut self) -> GeneratorResult<()> {
        writeln!(&mut self.writer, "#pragma once")?;
        for include in &self.params.includes {
            writeln!(&mut self.writer, "#include {}", include)?;
        }
        write!(&mut self.writer, "{}", HEADER_COMMENT)?;

        Ok(())
    }

    fn output_footer(&mut self) -> GeneratorResult<()> {
        write!(
            &mut self.writer,
            r#"
#define {prefix}_IMPL2(count, ...) {prefix} ## count (__VA_ARGS__)
#define {prefix}_IMPL(count, ...) {prefix}_IMPL2(count, __VA_ARGS__)

/**
 * This macro automatically generates a register_functions() method for a Derecho
 * Replicated Object, given the name of the class and the names of each method
 * that should be RPC-callable. For example, if you have a class Thing with
 * methods foo() and bar(), put this inside your class definition (in the public
 * section):
 *
 * {prefix}(Thing, foo, bar);
 */
#define {prefix}(...) {prefix}_IMPL({count}(__VA_ARGS__), __VA_ARGS__)

/**
 * This macro generates the Derecho-registered name of an RPC function, for use
 * in the template parameter of ordered_send (and other RPC callers), given the
 * name of the corresponding Replicated Object method. For example, if you have
 * a Replicated<Thing> reference named thing_handle, call its registered RPC
 * method foo() like this:
 *
 * thing_handle.ordered_send<RPC_NAME(foo)>(foo_args);
 */
#define RPC_NAME(...) {hash}(__VA_ARGS__)::hash()
"#,
            prefix = MACRO_PREFIX,
            count = self.params.arg_count_macro,
            hash = self.params.name_hash_macro,
        )?;

        Ok(())
    }

    pub fn flush(&mut self) -> GeneratorResult<()> {
        self.writer.flush()?;

        Ok(())
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Renders the complete header into a string.
///
/// # Example
/// ```
/// use rpcreg::generator::generate_header;
/// use rpcreg::method_count::MethodCount;
/// use rpcreg::params::GeneratorParams;
///
/// let header = generate_header(MethodCount::ONE, &GeneratorParams::default());
/// assert!(header.starts_with("#pragma once\n"));
/// assert!(header.contains("#define REGISTER_RPC_FUNCTIONS2(classname, a) \\\n"));
/// ```
#[must_use]
pub fn generate_header(max_count: MethodCount, params: &GeneratorParams) -> String {
    let mut writer = RegisterFunctionsWriter::with_params(Vec::new(), params.clone());
    writer
        .write_all_macros(max_count)
        .expect("Writing to a Vec cannot fail");

    String::from_utf8(writer.into_inner()).expect("Generated header is always valid UTF-8")
}

/// Writes the complete header to `path`, replacing its previous contents.
///
/// The header is first written into a temporary file next to `path`, which
/// is then renamed over the destination. If anything fails, the destination
/// is left as it was and the temporary file is removed.
pub fn write_header_file(
    path: &Path,
    max_count: MethodCount,
    params: &GeneratorParams,
) -> GeneratorResult<()> {
    info!(
        "Generating registration macros for up to {} methods into {}",
        max_count,
        path.display()
    );

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp_file = NamedTempFile::new_in(directory)?;
    set_header_permissions(temp_file.as_file())?;

    let mut writer =
        RegisterFunctionsWriter::with_params(BufWriter::new(temp_file), params.clone());
    writer.write_all_macros(max_count)?;
    let temp_file = writer.into_inner().into_inner().map_err(io::Error::from)?;

    temp_file.persist(path).map_err(io::Error::from)?;
    debug!("Renamed the temporary file to {}", path.display());

    Ok(())
}

#[cfg(unix)]
fn set_header_permissions(file: &File) -> io::Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    // temporary files are created as 0600
    file.set_permissions(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_header_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io::ErrorKind::NotFound;

    use crate::_internal_test_data::{
        BLOCK_1_METHOD, BLOCK_2_METHODS, BLOCK_5_METHODS, DERECHO_FOOTER, DERECHO_HEADER_1,
        DERECHO_HEADER_3, DERECHO_PREAMBLE,
    };
    use crate::generator::{
        generate_header, macro_name, GeneratorError, RegisterFunctionsWriter,
    };
    use crate::method_count::MethodCount;
    use crate::params::GeneratorParams;

    fn count(value: i64) -> MethodCount {
        MethodCount::new(value).unwrap()
    }

    fn block(value: i64) -> String {
        let mut buf = Vec::new();
        RegisterFunctionsWriter::new(&mut buf)
            .write_register_macro(count(value))
            .unwrap();

        String::from_utf8(buf).unwrap()
    }

    fn tag_lines(block: &str) -> Vec<&str> {
        block
            .lines()
            .filter(|line| line.contains("derecho::rpc::tag"))
            .collect()
    }

    #[test]
    fn test_macro_name() {
        assert_eq!(macro_name(count(1)), "REGISTER_RPC_FUNCTIONS2");
        assert_eq!(macro_name(count(10)), "REGISTER_RPC_FUNCTIONS11");
    }

    #[test]
    fn test_block_one_method() {
        let block = block(1);
        assert_eq!(block, BLOCK_1_METHOD);

        let lines = tag_lines(&block);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("(& classname :: a));\\"));
        assert!(!lines[0].contains("),\\"));
    }

    #[test]
    fn test_block_two_methods() {
        let block = block(2);
        assert_eq!(block, BLOCK_2_METHODS);

        let lines = tag_lines(&block);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("        return std::make_tuple("));
        assert!(lines[0].ends_with(":: a),\\"));
        assert!(lines[1].ends_with(":: b));\\"));
    }

    #[test]
    fn test_block_five_methods() {
        let block = block(5);
        assert_eq!(block, BLOCK_5_METHODS);

        let lines = tag_lines(&block);
        assert_eq!(lines.len(), 5);
        for (line, name) in lines.iter().zip(["a", "b", "c", "d", "e"]) {
            assert!(line.contains(&format!("CT_STRING({})::hash()", name)));
            assert!(line.contains(&format!("& classname :: {})", name)));
        }
        let middle: Vec<_> = lines[1..4]
            .iter()
            .filter(|line| line.starts_with("                               derecho"))
            .filter(|line| line.ends_with("),\\"))
            .collect();
        assert_eq!(middle.len(), 3);
        assert!(lines[4].ends_with("));\\"));
    }

    #[test]
    fn test_block_line_count() {
        for value in 1..=40 {
            let block = block(value);
            let lines = tag_lines(&block);
            let aligned = lines.iter().filter(|line| !line.contains("make_tuple")).count();

            assert_eq!(lines.len(), value as usize);
            assert!(lines[0].contains("make_tuple"));
            assert_eq!(aligned + 1, value as usize);
            // define, declaration and closing brace
            assert_eq!(block.lines().count(), value as usize + 3);
        }
    }

    #[test]
    fn test_every_line_continues_until_closing_brace() {
        let block = block(4);
        let lines: Vec<_> = block.lines().collect();

        let (closing, body) = lines.split_last().unwrap();
        assert!(body.iter().all(|line| line.ends_with('\\')));
        assert_eq!(*closing, "    } ");
    }

    #[test]
    fn test_header_one_method() {
        let header = generate_header(count(1), &GeneratorParams::default());
        assert_eq!(header, *DERECHO_HEADER_1);

        assert!(!header.contains("REGISTER_RPC_FUNCTIONS3("));
        assert!(!header.contains("),\\"));
    }

    #[test]
    fn test_header_three_methods() {
        let header = generate_header(count(3), &GeneratorParams::default());
        assert_eq!(header, *DERECHO_HEADER_3);
    }

    #[test]
    fn test_blocks_are_ascending() {
        let header = generate_header(count(12), &GeneratorParams::default());

        let defined: Vec<_> = header
            .lines()
            .filter_map(|line| line.strip_prefix("#define REGISTER_RPC_FUNCTIONS"))
            .filter_map(|rest| rest.split('(').next())
            .filter_map(|suffix| suffix.parse::<usize>().ok())
            .collect();
        assert_eq!(defined, (2..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_preamble_and_footer_placement() {
        for value in [1, 2, 7, 30] {
            let header = generate_header(count(value), &GeneratorParams::default());

            assert!(header.starts_with(DERECHO_PREAMBLE));
            assert!(header.ends_with(DERECHO_FOOTER));
            assert_eq!(header.matches(DERECHO_FOOTER).count(), 1);

            let footer_pos = header.find(DERECHO_FOOTER).unwrap();
            let last_block_pos = header
                .rfind(&format!("#define {}(", macro_name(count(value))))
                .unwrap();
            assert!(last_block_pos < footer_pos);
        }
    }

    #[test]
    fn test_idempotent() {
        let params = GeneratorParams::default();

        assert_eq!(
            generate_header(count(9), &params),
            generate_header(count(9), &params)
        );
    }

    #[test]
    fn test_many_methods() {
        let header = generate_header(count(30), &GeneratorParams::default());

        assert!(header.contains("#define REGISTER_RPC_FUNCTIONS31(classname, a, b, "));
        assert!(header.contains(", y, z, a1, b1, c1, d1) \\\n"));
        assert!(header.contains("CT_STRING(d1)::hash()>(& classname :: d1));\\\n"));
    }

    #[test]
    fn test_custom_params() {
        let params = GeneratorParams::builder()
            .include("\"rpc/ct_string.hpp\"")
            .tag_function("rpc::tag")
            .name_hash_macro("NAME_HASH")
            .arg_count_macro("ARG_COUNT")
            .build();
        let header = generate_header(count(2), &params);

        assert!(header.starts_with(
            "#pragma once\n#include <tuple>\n#include \"rpc/ct_string.hpp\"\n\n/**\n"
        ));
        assert!(header.contains(
            "        return std::make_tuple(rpc::tag<NAME_HASH(a)::hash()>(& classname :: a),\\\n"
        ));
        assert!(header.contains(
            "#define REGISTER_RPC_FUNCTIONS(...) REGISTER_RPC_FUNCTIONS_IMPL(ARG_COUNT(__VA_ARGS__), __VA_ARGS__)\n"
        ));
        assert!(header.ends_with("#define RPC_NAME(...) NAME_HASH(__VA_ARGS__)::hash()\n"));
        assert!(!header.contains("derecho::rpc::tag"));
        assert!(!header.contains("CT_STRING"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", GeneratorError::from(std::io::Error::from(NotFound))),
            "IO error: entity not found"
        );
    }

    #[test]
    fn test_error_source() {
        assert!(GeneratorError::from(std::io::Error::from(NotFound))
            .source()
            .is_some());
    }
}
