//! Qualifies every type reference in a [`File`] with the module it comes
//! from. This is what lets validation tell the built-in `List` apart from
//! a type of the same name declared in the file being checked.


use std::collections::{HashMap, HashSet};

use crate::parser::ast::{
    DeclarationKind, Exposing, ExposedItem, File, TypeAnnotation, TypeAnnotationKind, TypeName,
};

/// Types that every Elm module can use without importing anything.
const DEFAULT_EXPOSED_TYPES: &[(&str, &str)] = &[
    ("Basics", "Int"),
    ("Basics", "Float"),
    ("Basics", "Bool"),
    ("Basics", "Order"),
    ("Basics", "Never"),
    ("List", "List"),
    ("Maybe", "Maybe"),
    ("Result", "Result"),
    ("String", "String"),
    ("Char", "Char"),
    ("Platform", "Program"),
    ("Platform.Cmd", "Cmd"),
    ("Platform.Sub", "Sub"),
];

/// Module aliases that every Elm module gets for free.
const DEFAULT_ALIASES: &[(&str, &str)] = &[("Cmd", "Platform.Cmd"), ("Sub", "Platform.Sub")];

struct ResolveState {
    module_name: String,
    /// Types declared in the file itself.
    local_types: HashSet<String>,
    /// Maps a module alias to the real module name.
    aliases: HashMap<String, String>,
    /// Maps an unqualified type name to the module exposing it.
    exposed_types: HashMap<String, String>,
}

impl ResolveState {
    fn new(file: &File) -> Self {
        let mut res = Self {
            module_name: file.module_name().to_owned(),
            local_types: HashSet::new(),
            aliases: HashMap::new(),
            exposed_types: HashMap::new(),
        };

        for (module, name) in DEFAULT_EXPOSED_TYPES {
            res.exposed_types
                .insert((*name).to_owned(), (*module).to_owned());
        }

        for (alias, module) in DEFAULT_ALIASES {
            res.aliases.insert((*alias).to_owned(), (*module).to_owned());
        }

        for import in &file.imports {
            if let Some(alias) = &import.alias {
                res.aliases
                    .insert(alias.clone(), import.module_name.clone());
            }

            if let Some(Exposing::Explicit(items)) = &import.exposing {
                for item in items {
                    if let ExposedItem::Type { name, .. } = item {
                        res.exposed_types
                            .insert(name.clone(), import.module_name.clone());
                    }
                }
            }
        }

        for declaration in &file.declarations {
            match &declaration.kind {
                DeclarationKind::TypeAlias(alias) => {
                    res.local_types.insert(alias.name.clone());
                },

                DeclarationKind::CustomType(custom) => {
                    res.local_types.insert(custom.name.clone());
                },

                _ => {},
            }
        }

        res
    }

    fn resolve_name(&self, name: &mut TypeName) {
        name.module = match name.module.take() {
            Some(qualifier) => match self.aliases.get(&qualifier) {
                Some(module) => Some(module.clone()),
                None => Some(qualifier),
            },

            None if self.local_types.contains(&name.name) => Some(self.module_name.clone()),
            None => self.exposed_types.get(&name.name).cloned(),
        };
    }

    fn resolve_annotation(&self, annotation: &mut TypeAnnotation) {
        match &mut annotation.kind {
            TypeAnnotationKind::GenericType(_) | TypeAnnotationKind::Unit => {},

            TypeAnnotationKind::Typed(name, args) => {
                self.resolve_name(name);

                for arg in args {
                    self.resolve_annotation(arg);
                }
            },

            TypeAnnotationKind::Tupled(elements) => {
                for element in elements {
                    self.resolve_annotation(element);
                }
            },

            TypeAnnotationKind::Record(fields) | TypeAnnotationKind::GenericRecord(_, fields) => {
                for field in fields {
                    self.resolve_annotation(&mut field.annotation);
                }
            },

            TypeAnnotationKind::FunctionType(from, to) => {
                self.resolve_annotation(from);
                self.resolve_annotation(to);
            },
        }
    }

    fn resolve(self, file: &mut File) {
        for declaration in &mut file.declarations {
            match &mut declaration.kind {
                DeclarationKind::TypeAlias(alias) => self.resolve_annotation(&mut alias.annotation),

                DeclarationKind::CustomType(custom) => {
                    for constructor in &mut custom.constructors {
                        for argument in &mut constructor.arguments {
                            self.resolve_annotation(argument);
                        }
                    }
                },

                DeclarationKind::Function(function) => {
                    if let Some(signature) = &mut function.signature {
                        self.resolve_annotation(signature);
                    }
                },

                DeclarationKind::Port(port) => self.resolve_annotation(&mut port.annotation),
                DeclarationKind::Infix(_) => {},
            }
        }
    }
}

/// Qualifies every [`TypeName`] in `file` in place. Names that cannot be
/// traced to a module (ex. ones that may come from an `exposing (..)`
/// import) are left unqualified.
pub(crate) fn resolve(file: &mut File) {
    ResolveState::new(file).resolve(file);
}
