use lazy_static::lazy_static;

pub const DERECHO_PREAMBLE: &str = concat!(
    "#pragma once\n",
    "#include <tuple>\n",
    "\n",
    "/**\n",
    " * This is an automatically-generated file that makes it easier for user-created\n",
    " * Replicated Objects to register their RPC methods with Derecho by defining some\n",
    " * macros. Do not edit this file by hand; you should generate it with\n",
    " * generate-register-functions. The public interface is at the bottom of the\n",
    " * file.\n",
    " */\n",
    "\n",
);

pub const BLOCK_1_METHOD: &str = concat!(
    "#define REGISTER_RPC_FUNCTIONS2(classname, a) \\\n",
    "    static auto register_functions() {\\\n",
    "        return std::make_tuple(derecho::rpc::tag<CT_STRING(a)::hash()>(& classname :: a));\\\n",
    "    } \n",
);

pub const BLOCK_2_METHODS: &str = concat!(
    "#define REGISTER_RPC_FUNCTIONS3(classname, a, b) \\\n",
    "    static auto register_functions() {\\\n",
    "        return std::make_tuple(derecho::rpc::tag<CT_STRING(a)::hash()>(& classname :: a),\\\n",
    "                               derecho::rpc::tag<CT_STRING(b)::hash()>(& classname :: b));\\\n",
    "    } \n",
);

pub const BLOCK_3_METHODS: &str = concat!(
    "#define REGISTER_RPC_FUNCTIONS4(classname, a, b, c) \\\n",
    "    static auto register_functions() {\\\n",
    "        return std::make_tuple(derecho::rpc::tag<CT_STRING(a)::hash()>(& classname :: a),\\\n",
    "                               derecho::rpc::tag<CT_STRING(b)::hash()>(& classname :: b),\\\n",
    "                               derecho::rpc::tag<CT_STRING(c)::hash()>(& classname :: c));\\\n",
    "    } \n",
);

pub const BLOCK_5_METHODS: &str = concat!(
    "#define REGISTER_RPC_FUNCTIONS6(classname, a, b, c, d, e) \\\n",
    "    static auto register_functions() {\\\n",
    "        return std::make_tuple(derecho::rpc::tag<CT_STRING(a)::hash()>(& classname :: a),\\\n",
    "                               derecho::rpc::tag<CT_STRING(b)::hash()>(& classname :: b),\\\n",
    "                               derecho::rpc::tag<CT_STRING(c)::hash()>(& classname :: c),\\\n",
    "                               derecho::rpc::tag<CT_STRING(d)::hash()>(& classname :: d),\\\n",
    "                               derecho::rpc::tag<CT_STRING(e)::hash()>(& classname :: e));\\\n",
    "    } \n",
);

pub const DERECHO_FOOTER: &str = concat!(
    "\n",
    "#define REGISTER_RPC_FUNCTIONS_IMPL2(count, ...) REGISTER_RPC_FUNCTIONS ## count (__VA_ARGS__)\n",
    "#define REGISTER_RPC_FUNCTIONS_IMPL(count, ...) REGISTER_RPC_FUNCTIONS_IMPL2(count, __VA_ARGS__)\n",
    "\n",
    "/**\n",
    " * This macro automatically generates a register_functions() method for a Derecho\n",
    " * Replicated Object, given the name of the class and the names of each method\n",
    " * that should be RPC-callable. For example, if you have a class Thing with\n",
    " * methods foo() and bar(), put this inside your class definition (in the public\n",
    " * section):\n",
    " *\n",
    " * REGISTER_RPC_FUNCTIONS(Thing, foo, bar);\n",
    " */\n",
    "#define REGISTER_RPC_FUNCTIONS(...) REGISTER_RPC_FUNCTIONS_IMPL(VA_NARGS(__VA_ARGS__), __VA_ARGS__)\n",
    "\n",
    "/**\n",
    " * This macro generates the Derecho-registered name of an RPC function, for use\n",
    " * in the template parameter of ordered_send (and other RPC callers), given the\n",
    " * name of the corresponding Replicated Object method. For example, if you have\n",
    " * a Replicated<Thing> reference named thing_handle, call its registered RPC\n",
    " * method foo() like this:\n",
    " *\n",
    " * thing_handle.ordered_send<RPC_NAME(foo)>(foo_args);\n",
    " */\n",
    "#define RPC_NAME(...) CT_STRING(__VA_ARGS__)::hash()\n",
);

lazy_static! {
    pub static ref DERECHO_HEADER_1: String =
        [DERECHO_PREAMBLE, BLOCK_1_METHOD, DERECHO_FOOTER].concat();
    pub static ref DERECHO_HEADER_3: String = [
        DERECHO_PREAMBLE,
        BLOCK_1_METHOD,
        BLOCK_2_METHODS,
        BLOCK_3_METHODS,
        DERECHO_FOOTER
    ]
    .concat();
}
