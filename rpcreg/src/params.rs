/// Default name of the generated header file.
pub const OUTPUT_FILENAME: &str = "register_rpc_functions.h";

const DEFAULT_INCLUDE: &str = "<tuple>";
const DEFAULT_TAG_FUNCTION: &str = "derecho::rpc::tag";
const DEFAULT_NAME_HASH_MACRO: &str = "CT_STRING";
const DEFAULT_ARG_COUNT_MACRO: &str = "VA_NARGS";

/// Names of the external facilities the generated header refers to.
///
/// None of these are defined by the generated file; it only expands to
/// invocations of them:
/// * the tag function is called as `TAG<hash>(&classname::method)`,
/// * the name hash macro as `HASH(method)::hash()`,
/// * the argument count macro as `COUNT(...)`, expanding to the number of
///   arguments given.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratorParams {
    pub(crate) includes: Vec<String>,
    pub(crate) tag_function: String,
    pub(crate) name_hash_macro: String,
    pub(crate) arg_count_macro: String,
}

impl GeneratorParams {
    #[must_use]
    pub fn builder() -> GeneratorParamsBuilder {
        GeneratorParamsBuilder::new()
    }

    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    #[must_use]
    pub fn tag_function(&self) -> &str {
        &self.tag_function
    }

    #[must_use]
    pub fn name_hash_macro(&self) -> &str {
        &self.name_hash_macro
    }

    #[must_use]
    pub fn arg_count_macro(&self) -> &str {
        &self.arg_count_macro
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParamsBuilder::default().build()
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorParamsBuilder {
    includes: Vec<String>,
    tag_function: String,
    name_hash_macro: String,
    arg_count_macro: String,
}

impl GeneratorParamsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            includes: vec![DEFAULT_INCLUDE.to_owned()],
            tag_function: DEFAULT_TAG_FUNCTION.to_owned(),
            name_hash_macro: DEFAULT_NAME_HASH_MACRO.to_owned(),
            arg_count_macro: DEFAULT_ARG_COUNT_MACRO.to_owned(),
        }
    }

    /// Adds an `#include` line. The target has to contain its delimiters,
    /// e.g. `<tuple>` or `"derecho/rpc.hpp"`.
    pub fn include<T: Into<String>>(&mut self, target: T) -> &mut Self {
        self.includes.push(target.into());
        self
    }

    /// Replaces all the `#include` lines.
    pub fn includes<I, T>(&mut self, targets: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.includes = targets.into_iter().map(Into::into).collect();
        self
    }

    pub fn tag_function<T: Into<String>>(&mut self, tag_function: T) -> &mut Self {
        self.tag_function = tag_function.into();
        self
    }

    pub fn name_hash_macro<T: Into<String>>(&mut self, name_hash_macro: T) -> &mut Self {
        self.name_hash_macro = name_hash_macro.into();
        self
    }

    pub fn arg_count_macro<T: Into<String>>(&mut self, arg_count_macro: T) -> &mut Self {
        self.arg_count_macro = arg_count_macro.into();
        self
    }

    #[must_use]
    pub fn build(&self) -> GeneratorParams {
        GeneratorParams {
            includes: self.includes.clone(),
            tag_function: self.tag_function.clone(),
            name_hash_macro: self.name_hash_macro.clone(),
            arg_count_macro: self.arg_count_macro.clone(),
        }
    }
}

impl Default for GeneratorParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
