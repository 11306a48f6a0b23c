//! Multi-file loader: walks the include graph of a root file and publishes
//! a per-module symbol table (`SPEC_FULL.md` §4.5).

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::ast::Thrift;
use crate::config::LoaderOptions;
use crate::error::{LoaderError, LookupError};
use crate::parser;
use crate::symbol_table::{ModuleRegistry, SymbolTable, SymbolValue};

/// Caller-facing progress/warning sink. A trait object so downstream code
/// generators can route messages into their own logging, matching the
/// teacher's `Logger`-trait-plus-`tracing`-fallback pattern.
pub trait Logger {
    fn log(&self, message: &str);
}

/// Default `Logger` that forwards to `tracing`, so the library is useful
/// with no caller-supplied logger at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}

pub struct Loader {
    pub thrifts: IndexMap<PathBuf, Thrift>,
    pub modules: ModuleRegistry,
    options: LoaderOptions,
    logger: Box<dyn Logger>,
}

impl Loader {
    /// Loads `root_path` and every file it transitively includes.
    pub fn load(
        root_path: impl AsRef<Path>,
        logger: Box<dyn Logger>,
        options: LoaderOptions,
    ) -> Result<Self, LoaderError> {
        let mut loader = Self {
            thrifts: IndexMap::new(),
            modules: ModuleRegistry::new(),
            options,
            logger,
        };
        loader.process(root_path.as_ref())?;
        Ok(loader)
    }

    fn process(&mut self, path: &Path) -> Result<(), LoaderError> {
        let canonical = path
            .canonicalize()
            .map_err(|source| LoaderError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        // Cache hit terminates include cycles (`SPEC_FULL.md` §4.5 step 2).
        if self.thrifts.contains_key(&canonical) {
            return Ok(());
        }

        self.logger
            .log(&format!("Processing {}", canonical.display()));
        tracing::debug!(path = %canonical.display(), "processing thrift file");
        if canonical.extension().and_then(|e| e.to_str()) != Some(crate::base::constants::THRIFT_EXT) {
            tracing::debug!(
                path = %canonical.display(),
                "loading a file without the conventional .thrift extension"
            );
        }

        let text = std::fs::read_to_string(&canonical).map_err(|source| LoaderError::Io {
            path: canonical.clone(),
            source,
        })?;
        let thrift = parser::parse(&text).map_err(|source| LoaderError::Parse {
            path: canonical.clone(),
            source,
        })?;

        let module_name = canonical
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        if self.modules.contains(&module_name) {
            let message =
                format!("Warning: ambiguous include (module {module_name} already exists)");
            self.logger.log(&message);
            tracing::warn!(module = %module_name, "duplicate module name");
            if self.options.duplicate_module_is_fatal {
                return Err(LoaderError::DuplicateModule { name: module_name });
            }
        }

        let table = SymbolTable::from_thrift(&thrift);
        self.modules.insert(module_name, table);

        let includes = thrift.includes.clone();
        let base_dir = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        self.thrifts.insert(canonical, thrift);

        for include in &includes {
            let resolved = self.resolve_include(&base_dir, include.path.as_str());
            self.process(&resolved)?;
        }
        Ok(())
    }

    /// Resolves an `include` target relative to the including file's
    /// directory, falling back to the configured search roots in order
    /// (`SPEC_FULL.md` §4.5 step 6, §1 "Ambient stack").
    fn resolve_include(&self, base_dir: &Path, include_path: &str) -> PathBuf {
        let direct = base_dir.join(include_path);
        if direct.exists() {
            return direct;
        }
        for root in &self.options.search_roots {
            let candidate = root.join(include_path);
            if candidate.exists() {
                return candidate;
            }
        }
        direct
    }

    /// `find(name, module, recursive=true)` (`SPEC_FULL.md` §4.6).
    pub fn find(
        &self,
        name: &str,
        module: &str,
        recursive: bool,
    ) -> Result<SymbolValue, LookupError> {
        self.modules.find(name, module, recursive)
    }

    /// `lookup(name, module=None)` (`SPEC_FULL.md` §4.6).
    pub fn lookup(&self, name: &str, module: Option<&str>) -> Result<SymbolValue, LookupError> {
        self.modules.lookup(name, module)
    }

    /// Emits each loaded file's pretty-printed AST via the logger.
    pub fn dump(&self) {
        for (path, thrift) in &self.thrifts {
            self.logger.log(&format!("{}:\n{}", path.display(), thrift));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Clone)]
    struct CollectingLogger {
        messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    }

    impl CollectingLogger {
        fn new() -> Self {
            Self {
                messages: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
            }
        }
    }

    impl Logger for CollectingLogger {
        fn log(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn s4_include_cycle_terminates() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.thrift", "include \"b.thrift\"\n");
        let a_path = dir.path().join("a.thrift");
        write_file(dir.path(), "b.thrift", "include \"a.thrift\"\n");

        let loader = Loader::load(&a_path, Box::new(TracingLogger), LoaderOptions::default())
            .expect("cyclic includes must not hang or error");
        assert_eq!(loader.thrifts.len(), 2);
    }

    #[test]
    fn duplicate_module_warns_by_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        write_file(dir.path(), "shared.thrift", "const i32 A = 1\n");
        write_file(&dir.path().join("sub"), "shared.thrift", "const i32 B = 2\n");
        let root = write_file(
            dir.path(),
            "root.thrift",
            "include \"shared.thrift\"\ninclude \"sub/shared.thrift\"\n",
        );

        let logger = CollectingLogger::new();
        let messages = logger.messages.clone();
        let loader = Loader::load(&root, Box::new(logger), LoaderOptions::default()).unwrap();
        assert_eq!(loader.thrifts.len(), 3);
        assert!(messages.lock().unwrap().iter().any(|m| m.contains("Warning")));
    }

    #[test]
    fn find_resolves_across_modules() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "shared.thrift", "struct Shared {}\n");
        let root = write_file(
            dir.path(),
            "root.thrift",
            "include \"shared.thrift\"\nconst i32 X = 1\n",
        );

        let loader = Loader::load(&root, Box::new(TracingLogger), LoaderOptions::default()).unwrap();
        let value = loader.find("shared.Shared", "root", true).unwrap();
        assert!(matches!(value, SymbolValue::Struct(_)));
    }
}
