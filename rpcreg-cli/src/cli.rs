use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rpcreg::method_count::MethodCount;
use rpcreg::params::GeneratorParams;

use crate::opts::{method_count, output_target, OutputTarget};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(allow_negative_numbers = true)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// The maximum number of RPC-callable methods that the RPC registration
    /// macro should support (the larger the number, the more macros will be
    /// generated)
    #[clap(value_name = "N", value_parser = method_count)]
    pub num_methods: MethodCount,

    /// Output header file path; `-` is the standard output
    #[clap(short, long, default_value_t, value_parser = output_target)]
    pub output: OutputTarget,

    /// Additional header to include, with its delimiters (e.g.
    /// `"derecho/utils/ct_string.hpp"`); can be given multiple times
    #[clap(long = "include", value_name = "TARGET", value_parser)]
    pub includes: Vec<String>,

    /// Function used to tag member function pointers with their name hashes
    #[clap(long, value_name = "NAME", value_parser)]
    pub tag_function: Option<String>,

    /// Macro turning a method name into a compile-time string with `::hash()`
    #[clap(long, value_name = "NAME", value_parser)]
    pub name_hash_macro: Option<String>,

    /// Macro expanding to the number of its variadic arguments
    #[clap(long, value_name = "NAME", value_parser)]
    pub arg_count_macro: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn generator_params(&self) -> GeneratorParams {
        let mut params = GeneratorParams::builder();
        for include in &self.includes {
            params.include(include);
        }
        if let Some(tag_function) = &self.tag_function {
            params.tag_function(tag_function);
        }
        if let Some(name_hash_macro) = &self.name_hash_macro {
            params.name_hash_macro(name_hash_macro);
        }
        if let Some(arg_count_macro) = &self.arg_count_macro {
            params.arg_count_macro(arg_count_macro);
        }

        params.build()
    }
}
