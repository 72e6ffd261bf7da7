use std::path::PathBuf;

use utf8_chars::BufReadCharsExt;

use crate::{
    codegen::prelude::generate,
    parser::prelude::{parse_program, parse_program_from_stream, ParseError},
    transform::prelude::transform,
    utils::prelude::Error
};

/// Compiles a source text to call-expression syntax. Fail-fast: the first
/// lexical or syntax error aborts the whole compilation, with nothing
/// partial returned.
pub fn compile(src: &str) -> Result<String, ParseError> {
    let program = parse_program(src)?;
    let target = transform(&program);

    Ok(generate(&target))
}

pub fn compile_file(path: PathBuf) -> Result<String, Error> {
    let src = match std::fs::read_to_string(path.clone()) {
        Ok(src) => src,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    match compile(&src) {
        Ok(output) => Ok(output),
        Err(error) => Err(Error::Parse { path, src, error })
    }
}

/// Feeds the lexer from a buffered char stream instead of reading the file
/// into memory first. The source is still accumulated on the side so a
/// diagnostic can point into it.
pub fn compile_from_stream(path: PathBuf) -> Result<String, Error> {
    let file = match std::fs::File::open(path.clone()) {
        Ok(file) => file,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);
    let stream = reader.chars()
        .map(|c| {
            let c = c.unwrap();
            src.push(c);
            c
        });

    let program = match parse_program_from_stream(stream) {
        Ok(program) => program,
        Err(error) => {
            return Err(Error::Parse { path, src, error })
        }
    };

    let target = transform(&program);

    Ok(generate(&target))
}
