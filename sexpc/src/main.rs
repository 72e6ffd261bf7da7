mod cli;
mod rlpl;
mod rcpl;

use std::path::PathBuf;

use clap::Parser;
use cli::{print_compiled, print_compiling};
use sexp_core::{
    parser::prelude::parse_program,
    pipeline::{compile_file, compile_from_stream},
    utils::prelude::Error
};

#[derive(Parser)]
enum Command {
    /// Compiles a source file to call-expression syntax
    Compile {
        /// Path of source file
        path: PathBuf,
        /// Path of output file; prints to stdout when missing
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the parsed source tree instead of generated code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
        /// Stream the file through the lexer instead of reading it whole
        #[arg(long, default_value_t = false)]
        from_stream: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Compile Print Loop
    Rcpl
}

fn main() {
    match Command::parse() {
        Command::Compile { path, output, print_ast, from_stream } => {
            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_compiling(path.to_str().unwrap());
            let start = std::time::Instant::now();

            if print_ast {
                match std::fs::read_to_string(path.clone()) {
                    Ok(src) => match parse_program(&src) {
                        Ok(program) => println!("{:#?}", program),
                        Err(error) => {
                            let err = Error::Parse { path, src, error };
                            err.pretty(&mut buf);
                            buf_writer
                                .print(&buf)
                                .expect("Writing error to stderr");
                        }
                    },
                    Err(err) => {
                        let err = Error::StdIo { err: err.kind() };
                        err.pretty(&mut buf);
                        buf_writer
                            .print(&buf)
                            .expect("Writing error to stderr");
                    }
                }

                print_compiled(std::time::Instant::now() - start);
                return;
            }

            let result = if from_stream {
                compile_from_stream(path)
            } else {
                compile_file(path)
            };

            match result {
                Ok(generated) => match output {
                    Some(output) => {
                        if let Err(err) = std::fs::write(output, generated + "\n") {
                            let err = Error::StdIo { err: err.kind() };
                            err.pretty(&mut buf);
                            buf_writer
                                .print(&buf)
                                .expect("Writing error to stderr");
                        }
                    },
                    None => println!("{generated}")
                },
                Err(err) => {
                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");
                }
            }

            print_compiled(std::time::Instant::now() - start);
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rcpl => {
            let _ = rcpl::start();
        }
    };
}
