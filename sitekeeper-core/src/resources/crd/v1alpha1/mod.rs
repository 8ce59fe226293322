pub mod site_descriptor;
