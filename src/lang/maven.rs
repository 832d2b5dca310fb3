use crate::config::GeneratorConfig;

const POM_HEADER: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
                             http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
"#;

pub fn render_child_pom(config: &GeneratorConfig, artifact_id: &str) -> String {
    format!(
        r#"{POM_HEADER}  <parent>
    <groupId>{group}</groupId>
    <artifactId>{parent}</artifactId>
    <version>{version}</version>
  </parent>
  <artifactId>{artifact_id}</artifactId>
  <packaging>jar</packaging>
  <dependencies>
    <dependency>
      <groupId>org.junit.jupiter</groupId>
      <artifactId>junit-jupiter-api</artifactId>
      <version>{junit}</version>
      <scope>test</scope>
    </dependency>
    <dependency>
      <groupId>org.junit.jupiter</groupId>
      <artifactId>junit-jupiter-engine</artifactId>
      <version>{junit}</version>
      <scope>test</scope>
    </dependency>
  </dependencies>
  <build>
    <plugins>
      <plugin>
        <groupId>org.apache.maven.plugins</groupId>
        <artifactId>maven-surefire-plugin</artifactId>
        <version>{surefire}</version>
        <configuration>
          <useModulePath>false</useModulePath>
        </configuration>
      </plugin>
    </plugins>
  </build>
</project>
"#,
        group = config.group_id,
        parent = config.artifact_id,
        version = config.version,
        junit = config.junit_version,
        surefire = config.surefire_version,
    )
}

pub fn render_root_pom(config: &GeneratorConfig, modules: &[String]) -> String {
    let entries: String = modules
        .iter()
        .map(|m| format!("    <module>{}</module>\n", m))
        .collect();

    format!(
        r#"{POM_HEADER}  <groupId>{group}</groupId>
  <artifactId>{artifact}</artifactId>
  <version>{version}</version>
  <packaging>pom</packaging>
  <modules>
{entries}  </modules>
</project>
"#,
        group = config.group_id,
        artifact = config.artifact_id,
        version = config.version,
    )
}
