use springcli_core::sub_package;

use super::{render, to_camel_case};

const CONTROLLER: &str = r#"package {{package}};

import {{servicePackage}}.{{service}};
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.web.bind.annotation.RestController;

@RestController
public class {{controller}} {
    @Autowired
    private {{service}} {{serviceField}};
}
"#;

const SERVICE: &str = r#"package {{package}};

public interface {{service}} {

}
"#;

const REPOSITORY: &str = r#"package {{package}};

import {{entityPackage}}.{{entity}};
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;

@Repository
public interface {{repository}} extends JpaRepository<{{entity}}, Long> {

}
"#;

/// `<Name>Controller` with the matching service injected.
pub fn controller(base_package: &str, name: &str) -> String {
    let package = sub_package(base_package, "controller");
    let service_package = sub_package(base_package, "service");
    let controller = format!("{name}Controller");
    let service = format!("{name}Service");
    let service_field = to_camel_case(&service);
    render(
        CONTROLLER,
        &[
            ("package", package.as_str()),
            ("servicePackage", service_package.as_str()),
            ("controller", controller.as_str()),
            ("serviceField", service_field.as_str()),
            ("service", service.as_str()),
        ],
    )
}

/// `<Name>Service`, an empty interface.
pub fn service(base_package: &str, name: &str) -> String {
    let package = sub_package(base_package, "service");
    let service = format!("{name}Service");
    render(
        SERVICE,
        &[("package", package.as_str()), ("service", service.as_str())],
    )
}

/// `<Name>Repository` over entity `<Name>` with a `Long` key.
pub fn repository(base_package: &str, name: &str) -> String {
    let package = sub_package(base_package, "repository");
    let entity_package = sub_package(base_package, "entity");
    let repository = format!("{name}Repository");
    render(
        REPOSITORY,
        &[
            ("package", package.as_str()),
            ("entityPackage", entity_package.as_str()),
            ("repository", repository.as_str()),
            ("entity", name),
        ],
    )
}
