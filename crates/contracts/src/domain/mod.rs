pub mod a001_public_project;
