//! Embedded answer list, generated by the build script

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
