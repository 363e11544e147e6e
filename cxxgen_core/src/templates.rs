//! The built-in template catalog.
//!
//! Template bodies are authored below with a uniform source-level
//! indentation so they read naturally inside this file; registration strips
//! that indentation and trims blank lines, so the stored body starts at
//! column 0. Bodies are parameterized with `@name@` variables resolved from
//! the processing configuration at expansion time.

/// A named, variable-parameterized block of boilerplate text.
///
/// The `requires` list declares which other templates this one builds on.
/// It is informational only — dependencies are not expanded automatically;
/// the author of a target file places one marker per required template.
#[derive(Debug, Clone)]
pub struct Template {
	pub name: String,
	/// Names of templates this body depends on (not enforced at expansion).
	pub requires: Vec<String>,
	/// The normalized body (indentation-free, exactly one trailing newline).
	pub body: String,
}

/// A built-in catalog entry. The raw body is normalized when the entry is
/// registered into a [`Context`](crate::Context).
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
	pub name: &'static str,
	pub requires: &'static [&'static str],
	pub body: &'static str,
}

pub const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
	BuiltinTemplate {
		name: "VERSION",
		requires: &[],
		body: r#"
    #define @prefix@_VERSION_MAJOR @versionMajor@
    #define @prefix@_VERSION_MINOR @versionMinor@
    #define @prefix@_VERSION_PATCH @versionPatch@
    #define @prefix@_VERSION_STRING "@versionMajor@.@versionMinor@.@versionPatch@"
  "#,
	},
	// http://sourceforge.net/p/predef/wiki/Architectures/
	BuiltinTemplate {
		name: "ARCH",
		requires: &[],
		body: r#"
    // \def @prefix@_ARCH_ARM32
    // True if the target architecture is a 32-bit ARM.
    //
    // \def @prefix@_ARCH_ARM64
    // True if the target architecture is a 64-bit ARM.
    //
    // \def @prefix@_ARCH_X86
    // True if the target architecture is a 32-bit X86/IA32
    //
    // \def @prefix@_ARCH_X64
    // True if the target architecture is a 64-bit X64/AMD64
    //
    // \def @prefix@_ARCH_LE
    // True if the target architecture is little endian.
    //
    // \def @prefix@_ARCH_BE
    // True if the target architecture is big endian.
    //
    // \def @prefix@_ARCH_64BIT
    // True if the target architecture is 64-bit.

    #if (defined(_M_X64  ) || defined(__x86_64) || defined(__x86_64__) || \
         defined(_M_AMD64) || defined(__amd64 ) || defined(__amd64__ ))
    # define @prefix@_ARCH_X64 1
    #else
    # define @prefix@_ARCH_X64 0
    #endif

    #if (defined(_M_IX86 ) || defined(__X86__ ) || defined(__i386  ) || \
         defined(__IA32__) || defined(__I86__ ) || defined(__i386__) || \
         defined(__i486__) || defined(__i586__) || defined(__i686__))
    # define @prefix@_ARCH_X86 (!@prefix@_ARCH_X64)
    #else
    # define @prefix@_ARCH_X86 0
    #endif

    #if defined(__aarch64__)
    # define @prefix@_ARCH_ARM64 1
    #else
    # define @prefix@_ARCH_ARM64 0
    #endif

    #if (defined(_M_ARM  ) || defined(__arm    ) || defined(__thumb__ ) || \
         defined(_M_ARMT ) || defined(__arm__  ) || defined(__thumb2__))
    # define @prefix@_ARCH_ARM32 (!@prefix@_ARCH_ARM64)
    #else
    # define @prefix@_ARCH_ARM32 0
    #endif

    #define @prefix@_ARCH_LE    (  \
            @prefix@_ARCH_X86   || \
            @prefix@_ARCH_X64   || \
            @prefix@_ARCH_ARM32 || \
            @prefix@_ARCH_ARM64 )
    #define @prefix@_ARCH_BE (!(@prefix@_ARCH_LE))
    #define @prefix@_ARCH_64BIT (@prefix@_ARCH_X64 || @prefix@_ARCH_ARM64)
  "#,
	},
	BuiltinTemplate {
		name: "ARCH_UNALIGNED_RW",
		requires: &["ARCH"],
		body: r#"
    // \def @prefix@_ARCH_UNALIGNED_16
    // True if the target architecture allows unaligned 16-bit reads and writes.
    //
    // \def @prefix@_ARCH_UNALIGNED_32
    // True if the target architecture allows unaligned 32-bit reads and writes.
    //
    // \def @prefix@_ARCH_UNALIGNED_64
    // True if the target architecture allows unaligned 64-bit reads and writes.

    #define @prefix@_ARCH_UNALIGNED_16 (@prefix@_ARCH_X86 || @prefix@_ARCH_X64)
    #define @prefix@_ARCH_UNALIGNED_32 (@prefix@_ARCH_X86 || @prefix@_ARCH_X64)
    #define @prefix@_ARCH_UNALIGNED_64 (@prefix@_ARCH_X86 || @prefix@_ARCH_X64)
  "#,
	},
	// CLANG:
	//   - http://clang.llvm.org/cxx_status.html
	// GCC:
	//   - http://gcc.gnu.org/projects/cxx0x.html
	// MSC:
	//   - 1600 - Visual C++ 2010
	//   - 1700 - Visual C++ 2012
	//   - 1800 - Visual C++ 2013
	//   - 1900 - Visual C++ 2015
	//
	// http://sourceforge.net/p/predef/wiki/Compilers/
	BuiltinTemplate {
		name: "CC",
		requires: &[],
		body: r#"
    // \def @prefix@_CC_CLANG
    // Non-zero if the detected C++ compiler is CLANG (contains normalized CLANG version).
    //
    // \def @prefix@_CC_INTEL
    // Non-zero if the detected C++ compiler is INTEL (version not normalized).
    //
    // \def @prefix@_CC_GCC
    // Non-zero if the detected C++ compiler is GCC (contains normalized GCC version).
    //
    // \def @prefix@_CC_MSC
    // Non-zero if the detected C++ compiler is MSC (contains normalized MSC version).
    //
    // \def @prefix@_CC_MINGW
    // Non-zero if the detected C++ compiler is MINGW32 (set to 32) or MINGW64 (set to 64).

    #define @prefix@_CC_CLANG 0
    #define @prefix@_CC_GCC   0
    #define @prefix@_CC_INTEL 0
    #define @prefix@_CC_MSC   0

    // Intel masquerades as GCC, so check for it first.
    #if defined(__INTEL_COMPILER)
    # undef  @prefix@_CC_INTEL
    # define @prefix@_CC_INTEL __INTEL_COMPILER
    #elif defined(__clang__) && defined(__clang_minor__)
    # undef  @prefix@_CC_CLANG
    # define @prefix@_CC_CLANG (__clang_major__ * 10000000 + __clang_minor__ * 100000 + __clang_patchlevel__)
    #elif defined(__GNUC__) && defined(__GNUC_MINOR__) && defined(__GNUC_PATCHLEVEL__)
    # undef  @prefix@_CC_GCC
    # define @prefix@_CC_GCC (__GNUC__ * 10000000 + __GNUC_MINOR__ * 100000 + __GNUC_PATCHLEVEL__)
    #elif defined(_MSC_VER) && defined(_MSC_FULL_VER)
    # undef  @prefix@_CC_MSC
    # if _MSC_VER == _MSC_FULL_VER / 10000
    #  define @prefix@_CC_MSC (_MSC_VER * 100000 + (_MSC_FULL_VER % 10000))
    # else
    #  define @prefix@_CC_MSC (_MSC_VER * 100000 + (_MSC_FULL_VER % 100000))
    # endif
    #else
    # error "[@product@] Unable to detect the C/C++ compiler."
    #endif

    #if @prefix@_CC_INTEL && (defined(__GNUC__) || defined(__clang__))
    # define @prefix@_CC_INTEL_COMPAT_MODE 1
    #else
    # define @prefix@_CC_INTEL_COMPAT_MODE 0
    #endif

    #define @prefix@_CC_CLANG_EQ(x, y, z) (@prefix@_CC_CLANG == ((x) * 10000000 + (y) * 100000 + (z)))
    #define @prefix@_CC_CLANG_GE(x, y, z) (@prefix@_CC_CLANG >= ((x) * 10000000 + (y) * 100000 + (z)))

    #define @prefix@_CC_GCC_EQ(x, y, z) (@prefix@_CC_GCC == ((x) * 10000000 + (y) * 100000 + (z)))
    #define @prefix@_CC_GCC_GE(x, y, z) (@prefix@_CC_GCC >= ((x) * 10000000 + (y) * 100000 + (z)))

    #define @prefix@_CC_INTEL_EQ(x, y) (@prefix@_CC_INTEL == (((x) * 100) + (y)))
    #define @prefix@_CC_INTEL_GE(x, y) (@prefix@_CC_INTEL >= (((x) * 100) + (y)))

    #define @prefix@_CC_MSC_EQ(x, y, z) (@prefix@_CC_MSC == ((x) * 10000000 + (y) * 100000 + (z)))
    #define @prefix@_CC_MSC_GE(x, y, z) (@prefix@_CC_MSC >= ((x) * 10000000 + (y) * 100000 + (z)))

    #if defined(__MINGW64__)
    # define @prefix@_CC_MINGW 64
    #elif defined(__MINGW32__)
    # define @prefix@_CC_MINGW 32
    #else
    # define @prefix@_CC_MINGW 0
    #endif

    #if defined(__cplusplus)
    # if __cplusplus >= 201103L
    #  define @prefix@_CC_CXX_VERSION __cplusplus
    # elif defined(__GXX_EXPERIMENTAL_CXX0X__) || \
           @prefix@_CC_MSC_GE(18, 0, 0) || \
           @prefix@_CC_INTEL_GE(14, 0)
    #  define @prefix@_CC_CXX_VERSION 201103L
    # else
    #  define @prefix@_CC_CXX_VERSION 199711L
    # endif
    #endif

    #if !defined(@prefix@_CC_CXX_VERSION)
    # define @prefix@_CC_CXX_VERSION 0
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_FEATURES",
		requires: &["CC"],
		body: r#"
    #if @prefix@_CC_CLANG
    # define @prefix@_CC_HAS_ATTRIBUTE_ALIGNED       (__has_attribute(__aligned__))
    # define @prefix@_CC_HAS_ATTRIBUTE_ALWAYS_INLINE (__has_attribute(__always_inline__))
    # define @prefix@_CC_HAS_ATTRIBUTE_NOINLINE      (__has_attribute(__noinline__))
    # define @prefix@_CC_HAS_ATTRIBUTE_NORETURN      (__has_attribute(__noreturn__))
    # define @prefix@_CC_HAS_BUILTIN_ASSUME          (__has_builtin(__builtin_assume))
    # define @prefix@_CC_HAS_BUILTIN_ASSUME_ALIGNED  (__has_builtin(__builtin_assume_aligned))
    # define @prefix@_CC_HAS_BUILTIN_EXPECT          (__has_builtin(__builtin_expect))
    # define @prefix@_CC_HAS_BUILTIN_UNREACHABLE     (__has_builtin(__builtin_unreachable))
    # define @prefix@_CC_HAS_ALIGNAS                 (__has_extension(__cxx_alignas__))
    # define @prefix@_CC_HAS_ALIGNOF                 (__has_extension(__cxx_alignof__))
    # define @prefix@_CC_HAS_CONSTEXPR               (__has_extension(__cxx_constexpr__))
    # define @prefix@_CC_HAS_NOEXCEPT                (__has_extension(__cxx_noexcept__))
    # define @prefix@_CC_HAS_NULLPTR                 (__has_extension(__cxx_nullptr__))
    # define @prefix@_CC_HAS_OVERRIDE                (__has_extension(__cxx_override_control__))
    # define @prefix@_CC_HAS_RVALUE                  (__has_extension(__cxx_rvalue_references__))
    # define @prefix@_CC_HAS_STATIC_ASSERT           (__has_extension(__cxx_static_assert__))
    #endif

    #if @prefix@_CC_GCC
    # define @prefix@_CC_HAS_ATTRIBUTE_ALIGNED       (@prefix@_CC_GCC_GE(2, 7, 0))
    # define @prefix@_CC_HAS_ATTRIBUTE_ALWAYS_INLINE (@prefix@_CC_GCC_GE(4, 4, 0) && !@prefix@_CC_MINGW)
    # define @prefix@_CC_HAS_ATTRIBUTE_NOINLINE      (@prefix@_CC_GCC_GE(3, 4, 0) && !@prefix@_CC_MINGW)
    # define @prefix@_CC_HAS_ATTRIBUTE_NORETURN      (@prefix@_CC_GCC_GE(2, 5, 0))
    # define @prefix@_CC_HAS_BUILTIN_ASSUME          (0)
    # define @prefix@_CC_HAS_BUILTIN_ASSUME_ALIGNED  (@prefix@_CC_GCC_GE(4, 7, 0))
    # define @prefix@_CC_HAS_BUILTIN_EXPECT          (1)
    # define @prefix@_CC_HAS_BUILTIN_UNREACHABLE     (@prefix@_CC_GCC_GE(4, 5, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_ALIGNAS                 (@prefix@_CC_GCC_GE(4, 8, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_ALIGNOF                 (@prefix@_CC_GCC_GE(4, 8, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_CONSTEXPR               (@prefix@_CC_GCC_GE(4, 6, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_NOEXCEPT                (@prefix@_CC_GCC_GE(4, 6, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_NULLPTR                 (@prefix@_CC_GCC_GE(4, 6, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_OVERRIDE                (@prefix@_CC_GCC_GE(4, 7, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_RVALUE                  (@prefix@_CC_GCC_GE(4, 3, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    # define @prefix@_CC_HAS_STATIC_ASSERT           (@prefix@_CC_GCC_GE(4, 3, 0) && @prefix@_CC_CXX_VERSION >= 201103L)
    #endif

    #if @prefix@_CC_INTEL
    # define @prefix@_CC_HAS_ATTRIBUTE_ALIGNED       (@prefix@_CC_INTEL_COMPAT_MODE)
    # define @prefix@_CC_HAS_ATTRIBUTE_ALWAYS_INLINE (@prefix@_CC_INTEL_COMPAT_MODE)
    # define @prefix@_CC_HAS_ATTRIBUTE_NOINLINE      (@prefix@_CC_INTEL_COMPAT_MODE)
    # define @prefix@_CC_HAS_ATTRIBUTE_NORETURN      (@prefix@_CC_INTEL_COMPAT_MODE)
    # define @prefix@_CC_HAS_BUILTIN_EXPECT          (@prefix@_CC_INTEL_COMPAT_MODE)
    # define @prefix@_CC_HAS_DECLSPEC_ALIGN          (@prefix@_CC_INTEL_COMPAT_MODE == 0)
    # define @prefix@_CC_HAS_DECLSPEC_FORCEINLINE    (@prefix@_CC_INTEL_COMPAT_MODE == 0)
    # define @prefix@_CC_HAS_DECLSPEC_NOINLINE       (@prefix@_CC_INTEL_COMPAT_MODE == 0)
    # define @prefix@_CC_HAS_DECLSPEC_NORETURN       (@prefix@_CC_INTEL_COMPAT_MODE == 0)
    # define @prefix@_CC_HAS_ASSUME                  (1)
    # define @prefix@_CC_HAS_ASSUME_ALIGNED          (1)
    # define @prefix@_CC_HAS_ALIGNAS                 (@prefix@_CC_INTEL >= 1500)
    # define @prefix@_CC_HAS_ALIGNOF                 (@prefix@_CC_INTEL >= 1500)
    # define @prefix@_CC_HAS_CONSTEXPR               (@prefix@_CC_INTEL >= 1400)
    # define @prefix@_CC_HAS_NOEXCEPT                (@prefix@_CC_INTEL >= 1400)
    # define @prefix@_CC_HAS_NULLPTR                 (@prefix@_CC_INTEL >= 1206)
    # define @prefix@_CC_HAS_OVERRIDE                (@prefix@_CC_INTEL >= 1400)
    # define @prefix@_CC_HAS_RVALUE                  (@prefix@_CC_INTEL >= 1110)
    # define @prefix@_CC_HAS_STATIC_ASSERT           (@prefix@_CC_INTEL >= 1110)
    #endif

    #if @prefix@_CC_MSC
    # define @prefix@_CC_HAS_DECLSPEC_ALIGN          (1)
    # define @prefix@_CC_HAS_DECLSPEC_FORCEINLINE    (1)
    # define @prefix@_CC_HAS_DECLSPEC_NOINLINE       (1)
    # define @prefix@_CC_HAS_DECLSPEC_NORETURN       (1)
    # define @prefix@_CC_HAS_ASSUME                  (1)
    # define @prefix@_CC_HAS_ASSUME_ALIGNED          (0)
    # define @prefix@_CC_HAS_ALIGNAS                 (@prefix@_CC_MSC_GE(19, 0, 0))
    # define @prefix@_CC_HAS_ALIGNOF                 (@prefix@_CC_MSC_GE(19, 0, 0))
    # define @prefix@_CC_HAS_CONSTEXPR               (@prefix@_CC_MSC_GE(19, 0, 0))
    # define @prefix@_CC_HAS_NOEXCEPT                (@prefix@_CC_MSC_GE(19, 0, 0))
    # define @prefix@_CC_HAS_NULLPTR                 (@prefix@_CC_MSC_GE(16, 0, 0))
    # define @prefix@_CC_HAS_OVERRIDE                (@prefix@_CC_MSC_GE(14, 0, 0))
    # define @prefix@_CC_HAS_RVALUE                  (@prefix@_CC_MSC_GE(16, 0, 0))
    # define @prefix@_CC_HAS_STATIC_ASSERT           (@prefix@_CC_MSC_GE(16, 0, 0))
    #endif

    // Fixup some vendor specific keywords.
    #if !defined(@prefix@_CC_HAS_ASSUME)
    # define @prefix@_CC_HAS_ASSUME                  (0)
    #endif
    #if !defined(@prefix@_CC_HAS_ASSUME_ALIGNED)
    # define @prefix@_CC_HAS_ASSUME_ALIGNED          (0)
    #endif

    // Fixup compilers that don't support '__attribute__'.
    #if !defined(@prefix@_CC_HAS_ATTRIBUTE_ALIGNED)
    # define @prefix@_CC_HAS_ATTRIBUTE_ALIGNED       (0)
    #endif
    #if !defined(@prefix@_CC_HAS_ATTRIBUTE_ALWAYS_INLINE)
    # define @prefix@_CC_HAS_ATTRIBUTE_ALWAYS_INLINE (0)
    #endif
    #if !defined(@prefix@_CC_HAS_ATTRIBUTE_NOINLINE)
    # define @prefix@_CC_HAS_ATTRIBUTE_NOINLINE      (0)
    #endif
    #if !defined(@prefix@_CC_HAS_ATTRIBUTE_NORETURN)
    # define @prefix@_CC_HAS_ATTRIBUTE_NORETURN      (0)
    #endif

    // Fixup compilers that don't support '__builtin?'.
    #if !defined(@prefix@_CC_HAS_BUILTIN_ASSUME)
    # define @prefix@_CC_HAS_BUILTIN_ASSUME          (0)
    #endif
    #if !defined(@prefix@_CC_HAS_BUILTIN_ASSUME_ALIGNED)
    # define @prefix@_CC_HAS_BUILTIN_ASSUME_ALIGNED  (0)
    #endif
    #if !defined(@prefix@_CC_HAS_BUILTIN_EXPECT)
    # define @prefix@_CC_HAS_BUILTIN_EXPECT          (0)
    #endif
    #if !defined(@prefix@_CC_HAS_BUILTIN_UNREACHABLE)
    # define @prefix@_CC_HAS_BUILTIN_UNREACHABLE     (0)
    #endif

    // Fixup compilers that don't support 'declspec'.
    #if !defined(@prefix@_CC_HAS_DECLSPEC_ALIGN)
    # define @prefix@_CC_HAS_DECLSPEC_ALIGN          (0)
    #endif
    #if !defined(@prefix@_CC_HAS_DECLSPEC_FORCEINLINE)
    # define @prefix@_CC_HAS_DECLSPEC_FORCEINLINE    (0)
    #endif
    #if !defined(@prefix@_CC_HAS_DECLSPEC_NOINLINE)
    # define @prefix@_CC_HAS_DECLSPEC_NOINLINE       (0)
    #endif
    #if !defined(@prefix@_CC_HAS_DECLSPEC_NORETURN)
    # define @prefix@_CC_HAS_DECLSPEC_NORETURN       (0)
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_INLINE",
		requires: &["CC", "CC_FEATURES"],
		body: r#"
    // \def @prefix@_INLINE
    // Always inline the decorated function.
    #if @prefix@_CC_HAS_ATTRIBUTE_ALWAYS_INLINE
    # define @prefix@_INLINE inline __attribute__((__always_inline__))
    #elif @prefix@_CC_HAS_DECLSPEC_FORCEINLINE
    # define @prefix@_INLINE __forceinline
    #else
    # define @prefix@_INLINE inline
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_NOINLINE",
		requires: &["CC", "CC_FEATURES"],
		body: r#"
    // \def @prefix@_NOINLINE
    // Never inline the decorated function.
    #if @prefix@_CC_HAS_ATTRIBUTE_NOINLINE
    # define @prefix@_NOINLINE __attribute__((__noinline__))
    #elif @prefix@_CC_HAS_DECLSPEC_NOINLINE
    # define @prefix@_NOINLINE __declspec(noinline)
    #else
    # define @prefix@_NOINLINE
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_NORETURN",
		requires: &["CC", "CC_FEATURES"],
		body: r#"
    // \def @prefix@_NORETURN
    // The decorated function never returns (exit, assertion failure, etc...).
    #if @prefix@_CC_HAS_ATTRIBUTE_NORETURN
    # define @prefix@_NORETURN __attribute__((__noreturn__))
    #elif @prefix@_CC_HAS_DECLSPEC_NORETURN
    # define @prefix@_NORETURN __declspec(noreturn)
    #else
    # define @prefix@_NORETURN
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_NOEXCEPT",
		requires: &["CC", "CC_FEATURES"],
		body: r#"
    // \def @prefix@_NOEXCEPT
    // The decorated function never throws an exception (noexcept).
    #if @prefix@_CC_HAS_NOEXCEPT
    # define @prefix@_NOEXCEPT noexcept
    #else
    # define @prefix@_NOEXCEPT
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_API",
		requires: &["CC", "OS"],
		body: r#"
    // \def @prefix@_API
    // The decorated function is @product@ API and should be exported.
    #if !defined(@prefix@_API)
    # if defined(@prefix@_STATIC)
    #  define @prefix@_API
    # elif @prefix@_OS_WINDOWS
    #  if (@prefix@_CC_GCC || @prefix@_CC_CLANG) && !@prefix@_CC_MINGW
    #   if defined(@prefix@_EXPORTS)
    #    define @prefix@_API __attribute__((__dllexport__))
    #   else
    #    define @prefix@_API __attribute__((__dllimport__))
    #   endif
    #  else
    #   if defined(@prefix@_EXPORTS)
    #    define @prefix@_API __declspec(dllexport)
    #   else
    #    define @prefix@_API __declspec(dllimport)
    #   endif
    #  endif
    # else
    #  if @prefix@_CC_CLANG || @prefix@_CC_GCC_GE(4, 0, 0)
    #   define @prefix@_API __attribute__((__visibility__("default")))
    #  endif
    # endif
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_VARAPI",
		requires: &["CC"],
		body: r#"
    // \def @prefix@_VARAPI
    // The decorated variable is part of @product@ API and is exported.
    #if !defined(@prefix@_VARAPI)
    # define @prefix@_VARAPI extern @prefix@_API
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_EXPECT",
		requires: &["CC", "CC_FEATURES"],
		body: r#"
    // \def @prefix@_LIKELY(exp)
    // Expression exp is likely to be true.
    //
    // \def @prefix@_UNLIKELY(exp)
    // Expression exp is likely to be false.
    #if @prefix@_CC_HAS_BUILTIN_EXPECT
    # define @prefix@_LIKELY(exp) __builtin_expect(!!(exp), 1)
    # define @prefix@_UNLIKELY(exp) __builtin_expect(!!(exp), 0)
    #else
    # define @prefix@_LIKELY(exp) exp
    # define @prefix@_UNLIKELY(exp) exp
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_UNUSED",
		requires: &["CC"],
		body: r#"
    // \def @prefix@_UNUSED(x)
    // Mark a variable x as unused.
    #define @prefix@_UNUSED(x) (void)(x)
  "#,
	},
	BuiltinTemplate {
		name: "CC_ARRAY_SIZE",
		requires: &["CC"],
		body: r#"
    // \def @prefix@_ARRAY_SIZE(x)
    // Get the array size of x at compile-time.
    #define @prefix@_ARRAY_SIZE(x) (sizeof(x) / sizeof(x[0]))
  "#,
	},
	BuiltinTemplate {
		name: "CC_OFFSET_OF",
		requires: &["CC"],
		body: r#"
    // \def @prefix@_OFFSET_OF(x, y).
    // Get the offset of a member y of a struct x at compile-time.
    #define @prefix@_OFFSET_OF(x, y) ((int)(intptr_t)((const char*)&((const x*)0x1)->y) - 1)
  "#,
	},
	BuiltinTemplate {
		name: "CC_MACRO",
		requires: &["CC"],
		body: r#"
    // \def @prefix@_MACRO_BEGIN
    // Begin of a macro.
    //
    // \def @prefix@_MACRO_END
    // End of a macro.
    #if @prefix@_CC_GCC || @prefix@_CC_CLANG
    # define @prefix@_MACRO_BEGIN ({
    # define @prefix@_MACRO_END })
    #else
    # define @prefix@_MACRO_BEGIN do {
    # define @prefix@_MACRO_END } while (0)
    #endif
  "#,
	},
	BuiltinTemplate {
		name: "CC_NOP",
		requires: &["CC"],
		body: r#"
    // \def @prefix@_NOP
    // No operation.
    #if !defined(@prefix@_NOP)
    # define @prefix@_NOP ((void)0)
    #endif
  "#,
	},
	// http://sourceforge.net/p/predef/wiki/OperatingSystems/
	BuiltinTemplate {
		name: "OS",
		requires: &[],
		body: r#"
    #if defined(_WIN32) || defined(_WINDOWS)
    #define @prefix@_OS_WINDOWS       (1)
    #else
    #define @prefix@_OS_WINDOWS       (0)
    #endif

    #if defined(__APPLE__)
    # include <TargetConditionals.h>
    # define @prefix@_OS_MAC          (TARGET_OS_MAC)
    # define @prefix@_OS_IOS          (TARGET_OS_IPHONE)
    #else
    # define @prefix@_OS_MAC          (0)
    # define @prefix@_OS_IOS          (0)
    #endif

    #if defined(__ANDROID__)
    # define @prefix@_OS_ANDROID      (1)
    #else
    # define @prefix@_OS_ANDROID      (0)
    #endif

    #if defined(__linux__) || defined(__ANDROID__)
    # define @prefix@_OS_LINUX        (1)
    #else
    # define @prefix@_OS_LINUX        (0)
    #endif

    #if defined(__DragonFly__)
    # define @prefix@_OS_DRAGONFLYBSD (1)
    #else
    # define @prefix@_OS_DRAGONFLYBSD (0)
    #endif

    #if defined(__FreeBSD__)
    # define @prefix@_OS_FREEBSD      (1)
    #else
    # define @prefix@_OS_FREEBSD      (0)
    #endif

    #if defined(__NetBSD__)
    # define @prefix@_OS_NETBSD       (1)
    #else
    # define @prefix@_OS_NETBSD       (0)
    #endif

    #if defined(__OpenBSD__)
    # define @prefix@_OS_OPENBSD      (1)
    #else
    # define @prefix@_OS_OPENBSD      (0)
    #endif

    #if defined(__QNXNTO__)
    # define @prefix@_OS_QNX          (1)
    #else
    # define @prefix@_OS_QNX          (0)
    #endif

    #if defined(__sun)
    # define @prefix@_OS_SOLARIS      (1)
    #else
    # define @prefix@_OS_SOLARIS      (0)
    #endif

    #if defined(__CYGWIN__)
    # define @prefix@_OS_CYGWIN       (1)
    #else
    # define @prefix@_OS_CYGWIN       (0)
    #endif

    #define @prefix@_OS_BSD ( \
            @prefix@_OS_FREEBSD       || \
            @prefix@_OS_DRAGONFLYBSD  || \
            @prefix@_OS_NETBSD        || \
            @prefix@_OS_OPENBSD       || \
            @prefix@_OS_MAC)
    #define @prefix@_OS_POSIX         (!@prefix@_OS_WINDOWS)
  "#,
	},
	BuiltinTemplate {
		name: "STDTYPES",
		requires: &[],
		body: r#"
    #if defined(__MINGW32__) || defined(__MINGW64__)
    # include <sys/types.h>
    #endif
    #if defined(_MSC_VER) && (_MSC_VER < 1600)
    # include <limits.h>
    # if !defined(@prefix@_SUPPRESS_STD_TYPES)
    #  if (_MSC_VER < 1300)
    typedef signed char      int8_t;
    typedef signed short     int16_t;
    typedef signed int       int32_t;
    typedef signed __int64   int64_t;
    typedef unsigned char    uint8_t;
    typedef unsigned short   uint16_t;
    typedef unsigned int     uint32_t;
    typedef unsigned __int64 uint64_t;
    #  else
    typedef __int8           int8_t;
    typedef __int16          int16_t;
    typedef __int32          int32_t;
    typedef __int64          int64_t;
    typedef unsigned __int8  uint8_t;
    typedef unsigned __int16 uint16_t;
    typedef unsigned __int32 uint32_t;
    typedef unsigned __int64 uint64_t;
    #  endif
    # endif
    # define @prefix@_INT64_C(x) (x##i64)
    # define @prefix@_UINT64_C(x) (x##ui64)
    #else
    # include <stdint.h>
    # include <limits.h>
    # define @prefix@_INT64_C(x) (x##ll)
    # define @prefix@_UINT64_C(x) (x##ull)
    #endif
  "#,
	},
	// Includes <windows.h> with WIN32_LEAN_AND_MEAN and NOMINMAX defined,
	// then undefines whatever it defined itself.
	BuiltinTemplate {
		name: "WIN32_LEAN_AND_MEAN",
		requires: &[],
		body: r#"
    #if (defined(_WIN32) || defined(_WINDOWS)) && !defined(_WINDOWS_)
    # if !defined(WIN32_LEAN_AND_MEAN)
    #  define WIN32_LEAN_AND_MEAN
    #  define @prefix@_UNDEF_WIN32_LEAN_AND_MEAN
    # endif
    # if !defined(NOMINMAX)
    #  define NOMINMAX
    #  define @prefix@_UNDEF_NOMINMAX
    # endif
    # include <windows.h>
    # if defined(@prefix@_UNDEF_NOMINMAX)
    #  undef NOMINMAX
    #  undef @prefix@_UNDEF_NOMINMAX
    # endif
    # if defined(@prefix@_UNDEF_WIN32_LEAN_AND_MEAN)
    #  undef WIN32_LEAN_AND_MEAN
    #  undef @prefix@_UNDEF_WIN32_LEAN_AND_MEAN
    # endif
    #endif
  "#,
	},
];
